use super::{
    components::{entries::PayrollTable, history::PayrollHistory},
    utils::next_payroll_date,
    view_model::use_payroll_view_model,
};
use crate::{
    api::PayrollStatus,
    components::{
        cards::StatCard,
        common::{Button, ButtonVariant},
        forms::{SearchInput, SelectFilter, SelectField},
        layout::{ErrorMessage, PageHeader},
    },
    utils::{format::format_currency, time::today_in_app_tz},
};
use leptos::*;

#[component]
pub fn PayrollPanel() -> impl IntoView {
    let vm = use_payroll_view_model();
    let stats = vm.stats();
    let pending = vm.mutation.pending();
    let statuses = Signal::derive(|| {
        let mut options = vec![(String::new(), "All Statuses".to_string())];
        options.extend(
            [PayrollStatus::Processed, PayrollStatus::Pending]
                .iter()
                .map(|s| (s.label().to_string(), s.label().to_string())),
        );
        options
    });
    let next_run = next_payroll_date(today_in_app_tz()).format("%B %d").to_string();

    let actions = view! {
        <div class="flex gap-2">
            <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| vm.export())>
                "Download Report"
            </Button>
            <Button loading=pending on_click=Callback::new(move |_| vm.run_payroll())>
                "Run Payroll"
            </Button>
        </div>
    }
    .into_view();

    view! {
        <div class="space-y-6">
            <PageHeader title="Payroll System" subtitle="Manage employee salaries and payments." actions=actions />
            <div class="grid gap-6 md:grid-cols-3">
                <StatCard
                    title="Total Payroll"
                    value=Signal::derive(move || format_currency(stats.get().total_net))
                    hint="Net salaries this cycle"
                />
                <StatCard
                    title="Next Payroll Date"
                    value=Signal::derive(move || next_run.clone())
                    hint="Salaries are paid on the last day of the month"
                />
                <StatCard
                    title="Processed Payments"
                    value=Signal::derive(move || stats.get().processed_label())
                    hint="Entries processed this cycle"
                />
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex flex-wrap gap-3 items-end">
                    <SearchInput value=vm.search placeholder="Search employees..." />
                    <div class="w-48">
                        <SelectFilter value=vm.department label="Departments" options=vm.departments() />
                    </div>
                    <div class="w-48">
                        <SelectField label="Status" value=vm.status options=statuses />
                    </div>
                </div>
                {move || {
                    vm.entries
                        .error()
                        .get()
                        .map(|err| view! { <ErrorMessage message=err.error /> })
                }}
                <PayrollTable
                    entries=vm.filtered()
                    loading=vm.entries.loading()
                    pending=pending
                    on_approve=Callback::new(move |id| vm.approve(id))
                />
            </section>
            <PayrollHistory runs=vm.history.data() />
        </div>
    }
}
