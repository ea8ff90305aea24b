//! WorkWise HRMS browser client.
//!
//! Employees and HR staff share one single-page app; the signed-in role picks
//! which route tree is reachable.

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Installs the panic hook, resolves runtime config, then mounts the router.
pub fn boot() {
    console_error_panic_hook::set_once();
    leptos::spawn_local(async {
        let config = config::init().await;
        if let Err(err) = console_log::init_with_level(config.log_level) {
            web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
        }
        log::info!("Starting WorkWise HRMS against {}", config.api_base_url);
        router::mount_app();
    });
}
