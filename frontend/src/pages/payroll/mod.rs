use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PayrollPanel;

#[component]
pub fn PayrollPage() -> impl IntoView {
    view! { <PayrollPanel /> }
}
