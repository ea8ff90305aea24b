use crate::{
    api::{LeaveRequest, LeaveStatus},
    components::{cards::StatusBadge, dialog::Modal},
    pages::leave_requests::utils::leave_type_label,
    utils::format::{format_date, format_timestamp_date},
};
use leptos::*;

/// Label/value rows for the detail dialog, including the decision audit trail.
pub fn detail_rows(request: &LeaveRequest) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Leave Type", leave_type_label(&request.leave_type)),
        ("From", format_date(request.start_date)),
        ("To", format_date(request.end_date)),
        ("Reason", request.reason.clone()),
        ("Submitted", format_timestamp_date(request.created_at)),
    ];
    match request.status {
        LeaveStatus::Approved => {
            rows.push(("Approved By", request.approved_by.clone().unwrap_or_else(|| "-".into())));
            rows.push(("Approved On", format_timestamp_date(request.approved_on)));
        }
        LeaveStatus::Rejected => {
            rows.push(("Rejected By", request.rejected_by.clone().unwrap_or_else(|| "-".into())));
            rows.push(("Rejected On", format_timestamp_date(request.rejected_on)));
            rows.push((
                "Rejection Reason",
                request.rejection_reason.clone().unwrap_or_else(|| "-".into()),
            ));
        }
        _ => {}
    }
    rows
}

#[component]
pub fn LeaveDetailDialog(selected: RwSignal<Option<LeaveRequest>>) -> impl IntoView {
    view! {
        <Modal
            is_open=Signal::derive(move || selected.with(Option::is_some))
            title="Leave Request Details".to_string()
            on_close=Callback::new(move |_| selected.set(None))
        >
            {move || {
                selected
                    .get()
                    .map(|request| {
                        let status = request.status.label();
                        view! {
                            <div class="space-y-3">
                                <StatusBadge label=status />
                                <dl class="grid grid-cols-3 gap-2 text-sm">
                                    {detail_rows(&request)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <dt class="text-fg-muted">{label}</dt>
                                                <dd class="col-span-2 text-fg">{value}</dd>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
            }}
        </Modal>
    }
}
