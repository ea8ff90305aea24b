use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::DepartmentWorkPanel;

#[component]
pub fn DepartmentWorkPage() -> impl IntoView {
    view! { <DepartmentWorkPanel /> }
}
