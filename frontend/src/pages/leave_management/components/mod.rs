pub mod reject_dialog;
pub mod review_dialog;
pub mod table;
