use crate::{
    api::JobPosting,
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn JobPostings(
    #[prop(into)] jobs: Signal<Vec<JobPosting>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && jobs.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || jobs.with(|j| !j.is_empty())
                fallback=|| view! { <EmptyState title="No job postings yet" description="Create a posting to start receiving applications" /> }
            >
                <div class="grid gap-4 md:grid-cols-2">
                    <For
                        each=move || jobs.get()
                        key=|job| job.id.clone()
                        children=move |job| {
                            view! {
                                <article class="rounded-lg border border-border p-4 space-y-2">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h3 class="font-semibold text-fg">{job.title.clone()}</h3>
                                            <p class="text-sm text-fg-muted">
                                                {format!("{} · {}", job.department, job.location)}
                                            </p>
                                        </div>
                                        <StatusBadge label=job.status.clone() />
                                    </div>
                                    <dl class="grid grid-cols-3 gap-2 text-sm">
                                        <div>
                                            <dt class="text-fg-muted">"Type"</dt>
                                            <dd class="text-fg">{job.employment_type.clone().unwrap_or_else(|| "-".into())}</dd>
                                        </div>
                                        <div>
                                            <dt class="text-fg-muted">"Deadline"</dt>
                                            <dd class="text-fg">{format_date(job.deadline)}</dd>
                                        </div>
                                        <div>
                                            <dt class="text-fg-muted">"Applicants"</dt>
                                            <dd class="text-fg">{job.applicants}</dd>
                                        </div>
                                    </dl>
                                </article>
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::job_json;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn postings_include_closed_jobs() {
        let html = render_to_string(move || {
            let jobs: Vec<JobPosting> = [
                job_json("j1", "Backend Engineer", "Active"),
                job_json("j2", "QA Lead", "Closed"),
            ]
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
            view! { <JobPostings jobs=Signal::derive(move || jobs.clone()) loading=Signal::derive(|| false) /> }
        });
        assert!(html.contains("Backend Engineer"));
        assert!(html.contains("QA Lead"));
        assert!(html.contains("Feb 05, 2025"));
    }
}
