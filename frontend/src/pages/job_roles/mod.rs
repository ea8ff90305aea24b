use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::JobRolesPanel;

#[component]
pub fn JobRolesPage() -> impl IntoView {
    view! { <JobRolesPanel /> }
}
