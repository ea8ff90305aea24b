use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RecruitmentPanel;

#[component]
pub fn RecruitmentPage() -> impl IntoView {
    view! { <RecruitmentPanel /> }
}
