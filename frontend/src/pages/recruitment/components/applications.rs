use crate::{
    api::JobApplication,
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    utils::format::format_date,
};
use leptos::*;

const TH: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TD: &str = "px-4 py-3 text-sm text-fg";

#[component]
pub fn ApplicationTable(
    #[prop(into)] applications: Signal<Vec<JobApplication>>,
    #[prop(into)] loading: Signal<bool>,
    on_view: Callback<JobApplication>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && applications.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || applications.with(|a| !a.is_empty())
                fallback=|| view! { <EmptyState title="No applications found" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=TH>"Candidate"</th>
                                <th class=TH>"Position"</th>
                                <th class=TH>"Applied"</th>
                                <th class=TH>"Experience"</th>
                                <th class=TH>"Status"</th>
                                <th class=TH></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || applications.get()
                                key=|app| (app.id.clone(), app.status.label())
                                children=move |app| {
                                    let target = app.clone();
                                    view! {
                                        <tr>
                                            <td class=TD>
                                                <p class="font-medium">{app.name.clone()}</p>
                                                <p class="text-xs text-fg-muted">{app.email.clone()}</p>
                                            </td>
                                            <td class=TD>{app.position.clone()}</td>
                                            <td class=TD>{format_date(app.apply_date)}</td>
                                            <td class=TD>{app.experience.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD><StatusBadge label=app.status.label() /></td>
                                            <td class=TD>
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_view.call(target.clone())
                                                >
                                                    "View"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
