pub mod entries;
pub mod history;
