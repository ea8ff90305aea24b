use crate::{
    api::JobApplication,
    components::{cards::StatusBadge, empty_state::EmptyState},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn MyApplications(#[prop(into)] applications: Signal<Vec<JobApplication>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-3">"My Applications"</h2>
            <Show
                when=move || applications.with(|a| !a.is_empty())
                fallback=|| view! { <EmptyState title="You have not applied to any roles yet" /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || applications.get()
                        key=|app| app.id.clone()
                        children=move |app| {
                            let title = app.job_title.clone().unwrap_or_else(|| app.position.clone());
                            let applied = format!("Applied {}", format_date(app.apply_date));
                            view! {
                                <li class="flex items-center justify-between py-2">
                                    <div>
                                        <h4 class="font-medium text-fg">{title}</h4>
                                        <p class="text-xs text-fg-muted">{applied}</p>
                                    </div>
                                    <StatusBadge label=app.status.label() />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
