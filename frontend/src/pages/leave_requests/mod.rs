use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LeaveRequestsPanel;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    view! { <LeaveRequestsPanel /> }
}
