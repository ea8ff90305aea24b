use crate::{
    api::JobApplication,
    components::{cards::StatusBadge, empty_state::EmptyState},
};
use leptos::*;

#[component]
pub fn RecentApplications(#[prop(into)] applications: Signal<Vec<JobApplication>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-3">"Recent Applications"</h2>
            <Show
                when=move || applications.with(|a| !a.is_empty())
                fallback=|| view! { <EmptyState title="No applications yet" /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || applications.get()
                        key=|app| app.id.clone()
                        children=move |app| {
                            view! {
                                <li class="flex items-center justify-between py-2">
                                    <div>
                                        <p class="font-medium text-fg">{app.name.clone()}</p>
                                        <p class="text-xs text-fg-muted">{app.position.clone()}</p>
                                    </div>
                                    <StatusBadge label=app.status.label() />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
