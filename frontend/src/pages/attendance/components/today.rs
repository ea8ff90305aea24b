use crate::{
    api::AttendanceRecord,
    components::cards::StatusBadge,
    pages::attendance::utils::{ActionButtons, TodayStatus},
    utils::format::{format_date, format_time},
};
use chrono::NaiveDate;
use leptos::*;

const BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn TodayCard(
    today: NaiveDate,
    #[prop(into)] record: Signal<Option<AttendanceRecord>>,
    #[prop(into)] status: Signal<TodayStatus>,
    #[prop(into)] buttons: Signal<ActionButtons>,
    on_check_in: Callback<()>,
    on_check_out: Callback<()>,
) -> impl IntoView {
    let check_in = move || format_time(record.with(|r| r.as_ref().and_then(|r| r.check_in_time)));
    let check_out = move || format_time(record.with(|r| r.as_ref().and_then(|r| r.check_out_time)));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-lg font-semibold text-fg">"Today's Attendance"</h2>
                    <p class="text-sm text-fg-muted">{format_date(Some(today))}</p>
                </div>
                {move || view! { <StatusBadge label=status.get().label() /> }}
            </div>
            <dl class="grid grid-cols-2 gap-4">
                <div>
                    <dt class="text-xs uppercase text-fg-muted">"Check In"</dt>
                    <dd class="text-xl font-semibold text-fg">{check_in}</dd>
                </div>
                <div>
                    <dt class="text-xs uppercase text-fg-muted">"Check Out"</dt>
                    <dd class="text-xl font-semibold text-fg">{check_out}</dd>
                </div>
            </dl>
            <div class="flex gap-3">
                <button
                    type="button"
                    class=format!("{} bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover", BUTTON)
                    disabled=move || !buttons.get().check_in_enabled
                    on:click=move |_| on_check_in.call(())
                >
                    {move || buttons.get().check_in_label}
                </button>
                <button
                    type="button"
                    class=format!("{} bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover", BUTTON)
                    disabled=move || !buttons.get().check_out_enabled
                    on:click=move |_| on_check_out.call(())
                >
                    {move || buttons.get().check_out_label}
                </button>
            </div>
        </section>
    }
}
