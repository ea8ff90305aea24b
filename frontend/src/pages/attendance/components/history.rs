use crate::{
    api::AttendanceRecord,
    components::{
        cards::StatusBadge,
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    utils::format::{format_date, format_time},
};
use leptos::*;

#[component]
pub fn HistoryTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Attendance History"</h2>
            <Show
                when=move || !(loading.get() && records.with(Vec::is_empty))
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || records.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No attendance records yet" /> }
                >
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Check In"</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Check Out"</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || records.get()
                                    key=|record| record.id.clone()
                                    children=move |record| {
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 text-sm text-fg">{format_date(record.date)}</td>
                                                <td class="px-4 py-2 text-sm text-fg">{format_time(record.check_in_time)}</td>
                                                <td class="px-4 py-2 text-sm text-fg">{format_time(record.check_out_time)}</td>
                                                <td class="px-4 py-2 text-sm"><StatusBadge label=record.status.clone() /></td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn history_lists_rows() {
        let html = render_to_string(move || {
            let rows = vec![AttendanceRecord {
                id: "a1".into(),
                date: NaiveDate::from_ymd_opt(2025, 1, 9),
                check_in_time: None,
                check_out_time: None,
                status: "absent".into(),
                remarks: None,
            }];
            view! { <HistoryTable records=Signal::derive(move || rows.clone()) loading=Signal::derive(|| false) /> }
        });
        assert!(html.contains("Jan 09, 2025"));
        assert!(html.contains("absent"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = render_to_string(move || {
            view! { <HistoryTable records=Signal::derive(Vec::<AttendanceRecord>::new) loading=Signal::derive(|| false) /> }
        });
        assert!(html.contains("No attendance records yet"));
    }
}
