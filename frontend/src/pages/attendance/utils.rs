use chrono::NaiveDate;

use crate::api::{AttendanceMarkRequest, AttendanceRecord};

/// Where the signed-in employee stands for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodayStatus {
    NotCheckedIn,
    CheckedIn,
    Completed,
    /// A record exists for today but carries no check-in.
    Absent,
}

impl TodayStatus {
    pub fn from_record(record: Option<&AttendanceRecord>) -> Self {
        match record {
            None => TodayStatus::NotCheckedIn,
            Some(r) => match (r.check_in_time, r.check_out_time) {
                (None, _) => TodayStatus::Absent,
                (Some(_), None) => TodayStatus::CheckedIn,
                (Some(_), Some(_)) => TodayStatus::Completed,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodayStatus::NotCheckedIn => "Not Checked In",
            TodayStatus::CheckedIn => "Checked In",
            TodayStatus::Completed => "Completed",
            TodayStatus::Absent => "Absent",
        }
    }

    /// Wording used on the dashboard card.
    pub fn dashboard_label(&self) -> &'static str {
        match self {
            TodayStatus::CheckedIn => "Present",
            other => other.label(),
        }
    }
}

pub fn find_today(records: &[AttendanceRecord], today: NaiveDate) -> Option<&AttendanceRecord> {
    records.iter().find(|r| r.date == Some(today))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButtons {
    pub check_in_enabled: bool,
    pub check_in_label: &'static str,
    pub check_out_enabled: bool,
    pub check_out_label: &'static str,
}

pub fn action_buttons(status: TodayStatus, pending: bool) -> ActionButtons {
    let checked_in = matches!(status, TodayStatus::CheckedIn | TodayStatus::Completed);
    let checked_out = status == TodayStatus::Completed;
    ActionButtons {
        check_in_enabled: !pending && status == TodayStatus::NotCheckedIn,
        check_in_label: if checked_in { "Checked In" } else { "Check In" },
        check_out_enabled: !pending && status == TodayStatus::CheckedIn,
        check_out_label: if checked_out { "Checked Out" } else { "Check Out" },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    CheckIn,
    CheckOut,
}

impl MarkKind {
    pub fn request(&self) -> AttendanceMarkRequest {
        let remarks = match self {
            MarkKind::CheckIn => "Regular check-in",
            MarkKind::CheckOut => "Regular check-out",
        };
        AttendanceMarkRequest {
            status: "present".into(),
            remarks: remarks.into(),
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            MarkKind::CheckIn => "Checked in successfully",
            MarkKind::CheckOut => "Checked out successfully",
        }
    }
}

/// Newest first; undated rows sink to the bottom.
pub fn sort_history(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::wire_date;
    use chrono::{TimeZone, Utc};

    fn record(date: &str, check_in: bool, check_out: bool) -> AttendanceRecord {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 3, 30, 0).single();
        AttendanceRecord {
            id: format!("att-{date}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            check_in_time: if check_in { at } else { None },
            check_out_time: if check_out { at } else { None },
            status: "present".into(),
            remarks: None,
        }
    }

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn checked_in_today_enables_only_check_out() {
        let records = vec![record("2025-01-09", true, true), record("2025-01-10", true, false)];
        let status = TodayStatus::from_record(find_today(&records, day("2025-01-10")));
        assert_eq!(status, TodayStatus::CheckedIn);
        assert_eq!(status.label(), "Checked In");

        let buttons = action_buttons(status, false);
        assert!(!buttons.check_in_enabled);
        assert!(buttons.check_out_enabled);
        assert_eq!(buttons.check_in_label, "Checked In");
        assert_eq!(buttons.check_out_label, "Check Out");
    }

    #[test]
    fn timestamp_record_matches_local_today() {
        let mut record: AttendanceRecord = serde_json::from_value(serde_json::json!({
            "_id": "att-1",
            "checkInTime": "2025-01-10T03:30:00.000Z",
            "status": "present"
        }))
        .unwrap();
        record.date = wire_date::parse_date_in(
            "2025-01-09T18:30:00.000Z",
            Some(chrono_tz::Asia::Kolkata),
        );
        let records = vec![record];
        let status = TodayStatus::from_record(find_today(&records, day("2025-01-10")));
        assert_eq!(status, TodayStatus::CheckedIn);
        assert!(!action_buttons(status, false).check_in_enabled);
    }

    #[test]
    fn no_record_today_enables_check_in() {
        let records = vec![record("2025-01-09", true, true)];
        let status = TodayStatus::from_record(find_today(&records, day("2025-01-10")));
        assert_eq!(status, TodayStatus::NotCheckedIn);
        let buttons = action_buttons(status, false);
        assert!(buttons.check_in_enabled);
        assert!(!buttons.check_out_enabled);
    }

    #[test]
    fn pending_mutation_disables_both() {
        let buttons = action_buttons(TodayStatus::NotCheckedIn, true);
        assert!(!buttons.check_in_enabled);
        assert!(!buttons.check_out_enabled);
    }

    #[test]
    fn completed_and_absent_disable_both() {
        for status in [TodayStatus::Completed, TodayStatus::Absent] {
            let buttons = action_buttons(status, false);
            assert!(!buttons.check_in_enabled && !buttons.check_out_enabled);
        }
        assert_eq!(action_buttons(TodayStatus::Completed, false).check_out_label, "Checked Out");
        assert_eq!(
            TodayStatus::from_record(Some(&record("2025-01-10", false, false))),
            TodayStatus::Absent
        );
    }

    #[test]
    fn dashboard_wording_differs_for_checked_in() {
        assert_eq!(TodayStatus::CheckedIn.dashboard_label(), "Present");
        assert_eq!(TodayStatus::NotCheckedIn.dashboard_label(), "Not Checked In");
    }

    #[test]
    fn mark_requests_carry_remarks() {
        assert_eq!(MarkKind::CheckIn.request().remarks, "Regular check-in");
        assert_eq!(MarkKind::CheckOut.request().status, "present");
    }

    #[test]
    fn history_sorts_newest_first() {
        let mut records = vec![
            record("2025-01-08", true, true),
            record("2025-01-10", true, false),
            record("2025-01-09", true, true),
        ];
        sort_history(&mut records);
        let dates: Vec<_> = records.iter().map(|r| r.date.unwrap().to_string()).collect();
        assert_eq!(dates, vec!["2025-01-10", "2025-01-09", "2025-01-08"]);
    }
}
