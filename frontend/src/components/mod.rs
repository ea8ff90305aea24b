pub mod cards;
pub mod common;
pub mod confirm_dialog;
pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod toaster;
