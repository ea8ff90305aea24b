use crate::{
    api::{ApiError, CreateLeaveRequest, LeaveRequest},
    utils::time::parse_input_date,
};
use leptos::*;

/// Wire value and display label for each leave type.
pub const LEAVE_TYPES: [(&str, &str); 6] = [
    ("sick", "Sick Leave"),
    ("vacation", "Vacation Leave"),
    ("personal", "Personal Leave"),
    ("maternity", "Maternity Leave"),
    ("paternity", "Paternity Leave"),
    ("other", "Other Leave"),
];

pub fn leave_type_label(value: &str) -> String {
    LEAVE_TYPES
        .iter()
        .find(|(wire, _)| wire.eq_ignore_ascii_case(value.trim()))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn to_payload(&self) -> Result<CreateLeaveRequest, ApiError> {
        validate_leave(
            &self.leave_type.get_untracked(),
            &self.start_date.get_untracked(),
            &self.end_date.get_untracked(),
            &self.reason.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }
}

pub fn validate_leave(
    leave_type: &str,
    start_date: &str,
    end_date: &str,
    reason: &str,
) -> Result<CreateLeaveRequest, ApiError> {
    if [leave_type, start_date, end_date, reason]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ApiError::validation("Please fill all required fields"));
    }
    let (Some(start), Some(end)) = (parse_input_date(start_date), parse_input_date(end_date)) else {
        return Err(ApiError::validation("Please enter valid dates"));
    };
    if end < start {
        return Err(ApiError::validation("End date cannot be before start date"));
    }
    Ok(CreateLeaveRequest {
        leave_type: leave_type.trim().to_string(),
        start_date: start,
        end_date: end,
        reason: reason.trim().to_string(),
    })
}

/// Newest submission first.
pub fn sort_newest_first(requests: &mut [LeaveRequest]) {
    requests.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.start_date.cmp(&a.start_date))
    });
}
