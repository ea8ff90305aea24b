use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel /> }
}
