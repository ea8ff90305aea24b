use crate::{
    api::JobPosting,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn JobList(
    #[prop(into)] jobs: Signal<Vec<JobPosting>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] applied: Callback<String, bool>,
    on_open: Callback<JobPosting>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && jobs.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || jobs.with(|j| !j.is_empty())
                fallback=|| view! { <EmptyState title="No open positions" description="Try a different search." /> }
            >
                <div class="space-y-3">
                    <For
                        each=move || jobs.get()
                        key=|job| job.id.clone()
                        children=move |job| {
                            let already = applied.call(job.id.clone());
                            let meta = format!(
                                "{} · {} · {}",
                                job.department,
                                job.location,
                                job.employment_type.clone().unwrap_or_else(|| "Full-time".into())
                            );
                            let deadline = format!("Apply by {}", format_date(job.deadline));
                            let title = job.title.clone();
                            view! {
                                <div class="border border-border rounded-lg p-4 flex items-start justify-between gap-4">
                                    <div>
                                        <h3 class="font-medium text-lg text-fg">{title}</h3>
                                        <p class="text-sm text-fg-muted">{meta}</p>
                                        <p class="text-xs text-fg-muted mt-1">{deadline}</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                        disabled=already
                                        on:click=move |_| on_open.call(job.clone())
                                    >
                                        {if already { "Applied" } else { "View & Apply" }}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}
