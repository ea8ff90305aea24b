use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HrDashboardPanel;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    view! { <HrDashboardPanel /> }
}
