//! Navigation helpers. Inside the router, moves go through `leptos_router`; elsewhere
//! (the API client, tests) they fall back to a full-page load.

use leptos::*;

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            log::error!("Navigation to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static REDIRECTS: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("navigation requested: {}", path);
    REDIRECTS.with(|cell| cell.borrow_mut().push(path.to_string()));
}

/// Drains the redirects recorded on this thread.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn take_redirects() -> Vec<String> {
    REDIRECTS.with(|cell| std::mem::take(&mut *cell.borrow_mut()))
}

/// Navigator that uses the router when one is mounted and full-page loads otherwise.
pub fn use_navigator() -> Callback<String> {
    if use_context::<leptos_router::RouterContext>().is_some() {
        let navigate = leptos_router::use_navigate();
        Callback::new(move |path: String| navigate(&path, Default::default()))
    } else {
        Callback::new(move |path: String| redirect_to(&path))
    }
}
