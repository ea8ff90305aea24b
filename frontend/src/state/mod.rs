pub mod auth;
pub mod notify;
pub mod session;
pub mod view;
