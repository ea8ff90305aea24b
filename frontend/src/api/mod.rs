mod attendance;
mod auth;
pub mod client;
mod employees;
mod leave;
mod payroll;
mod recruitment;
mod tasks;
pub mod types;

pub use client::ApiClient;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
