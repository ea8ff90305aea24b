use super::{
    components::{history::HistoryTable, rules::AttendanceRules, today::TodayCard},
    utils::MarkKind,
    view_model::use_attendance_view_model,
};
use crate::components::layout::PageHeader;
use leptos::*;

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();

    view! {
        <div class="space-y-6">
            <PageHeader title="Attendance" subtitle="Record your working day and review past entries" />
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <TodayCard
                        today=vm.today
                        record=vm.today_record()
                        status=vm.today_status()
                        buttons=vm.buttons()
                        on_check_in=Callback::new(move |_| vm.mark(MarkKind::CheckIn))
                        on_check_out=Callback::new(move |_| vm.mark(MarkKind::CheckOut))
                    />
                </div>
                <AttendanceRules />
            </div>
            <HistoryTable records=vm.history.data() loading=vm.history.loading() />
        </div>
    }
}
