pub mod history;
pub mod rules;
pub mod today;
