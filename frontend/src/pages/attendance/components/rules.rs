use leptos::*;

const RULES: [&str; 4] = [
    "Check in when you start work and check out when you finish.",
    "Each day has one check-in and one check-out.",
    "Days without a check-in are recorded as absent.",
    "Contact HR to correct a missed or wrong entry.",
];

#[component]
pub fn AttendanceRules() -> impl IntoView {
    view! {
        <section class="bg-surface-muted rounded-lg p-6">
            <h2 class="text-sm font-semibold text-fg mb-2">"Attendance Rules"</h2>
            <ul class="list-disc list-inside space-y-1 text-sm text-fg-muted">
                {RULES.iter().map(|rule| view! { <li>{*rule}</li> }).collect_view()}
            </ul>
        </section>
    }
}
