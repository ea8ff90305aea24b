use crate::{
    api::{ApiError, LeaveDecisionRequest, LeaveRequest, LeaveStatus},
    config,
    utils::{
        filter::{distinct_values, matches_query, matches_select, Searchable},
        time::{same_month, to_zone},
    },
};
use chrono::NaiveDate;
use chrono_tz::Tz;

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.employee_name(), self.reason.as_str()];
        if let Some(employee_id) = self.employee_summary().and_then(|e| e.employee_id.as_deref()) {
            fields.push(employee_id);
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveStats {
    pub pending: usize,
    pub absent_today: usize,
    pub this_month: usize,
}

impl LeaveStats {
    pub fn compute(requests: &[LeaveRequest], today: NaiveDate) -> Self {
        Self::compute_in(requests, today, config::current_time_zone())
    }

    /// `today` and creation timestamps are compared as calendar days in `zone`.
    pub fn compute_in(requests: &[LeaveRequest], today: NaiveDate, zone: Option<Tz>) -> Self {
        let mut stats = Self::default();
        for request in requests {
            match request.status {
                LeaveStatus::Pending => stats.pending += 1,
                LeaveStatus::Approved if request.start_date == Some(today) => {
                    stats.absent_today += 1
                }
                _ => {}
            }
            if request
                .created_at
                .is_some_and(|created| same_month(to_zone(created, zone).date_naive(), today))
            {
                stats.this_month += 1;
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveFilters {
    pub query: String,
    pub department: String,
    pub status: String,
}

pub fn filter_requests(requests: &[LeaveRequest], filters: &LeaveFilters) -> Vec<LeaveRequest> {
    requests
        .iter()
        .filter(|r| matches_query(*r, &filters.query))
        .filter(|r| matches_select(r.department_label(), &filters.department))
        .filter(|r| matches_select(r.status.as_str(), &filters.status))
        .cloned()
        .collect()
}

pub fn department_options(requests: &[LeaveRequest]) -> Vec<String> {
    distinct_values(requests.iter().map(LeaveRequest::department_label))
}

pub fn approval(reviewer: &str) -> LeaveDecisionRequest {
    LeaveDecisionRequest {
        status: LeaveStatus::Approved,
        approved_by: Some(reviewer.to_string()),
        rejected_by: None,
        rejection_reason: None,
    }
}

pub fn rejection(reviewer: &str, reason: &str) -> Result<LeaveDecisionRequest, ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::validation("Please provide a reason for rejection"));
    }
    Ok(LeaveDecisionRequest {
        status: LeaveStatus::Rejected,
        approved_by: None,
        rejected_by: Some(reviewer.to_string()),
        rejection_reason: Some(reason.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approval_payload_names_reviewer() {
        let body = serde_json::to_value(approval("Hema Rao")).unwrap();
        assert_eq!(body, json!({ "status": "approved", "approvedBy": "Hema Rao" }));
    }

    #[test]
    fn rejection_requires_reason() {
        assert_eq!(
            rejection("Hema Rao", "   ").unwrap_err().error,
            "Please provide a reason for rejection"
        );
        let body = serde_json::to_value(rejection("Hema Rao", " Team offsite ").unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "rejected",
                "rejectedBy": "Hema Rao",
                "rejectionReason": "Team offsite"
            })
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::leave_json;
    use serde_json::json;

    fn requests() -> Vec<LeaveRequest> {
        let mut finance = leave_json("l3", "pending", "2025-01-20", "2025-01-21");
        finance["employeeId"] = json!({
            "_id": "e2",
            "name": "Nisha Rao",
            "employeeId": "EMP-042",
            "department": "Finance"
        });
        finance["reason"] = json!("Medical appointment");
        finance["createdAt"] = json!("2024-12-28T08:00:00.000Z");
        [
            leave_json("l1", "pending", "2025-01-14", "2025-01-15"),
            leave_json("l2", "approved", "2025-01-10", "2025-01-12"),
            finance,
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
    }

    #[test]
    fn stats_count_pending_absent_and_month() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let stats = LeaveStats::compute_in(&requests(), today, Some(chrono_tz::UTC));
        assert_eq!(
            stats,
            LeaveStats {
                pending: 2,
                absent_today: 1,
                this_month: 2
            }
        );
    }

    #[test]
    fn month_count_follows_the_configured_zone() {
        let mut late = leave_json("l4", "pending", "2025-02-03", "2025-02-04");
        late["createdAt"] = json!("2025-01-31T20:00:00.000Z");
        let requests: Vec<LeaveRequest> = vec![serde_json::from_value(late).unwrap()];
        let first_of_feb = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let kolkata = LeaveStats::compute_in(&requests, first_of_feb, Some(chrono_tz::Asia::Kolkata));
        assert_eq!(kolkata.this_month, 1);
        let utc = LeaveStats::compute_in(&requests, first_of_feb, Some(chrono_tz::UTC));
        assert_eq!(utc.this_month, 0);
    }

    #[test]
    fn filters_combine() {
        let all = requests();
        let by = |query: &str, department: &str, status: &str| {
            filter_requests(
                &all,
                &LeaveFilters {
                    query: query.into(),
                    department: department.into(),
                    status: status.into(),
                },
            )
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>()
        };
        assert_eq!(by("", "", "").len(), 3);
        assert_eq!(by("", "Finance", ""), vec!["l3"]);
        assert_eq!(by("", "", "approved"), vec!["l2"]);
        assert_eq!(by("emp-042", "", ""), vec!["l3"]);
        assert_eq!(by("family", "Engineering", "pending"), vec!["l1"]);
    }

    #[test]
    fn department_options_mix_objects_and_names() {
        assert_eq!(department_options(&requests()), vec!["Engineering", "Finance"]);
    }
}
