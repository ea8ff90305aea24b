use chrono::NaiveDate;

use crate::{
    api::{AttendanceRecord, LeaveRequest},
    pages::attendance::utils::{find_today, TodayStatus},
    utils::format::format_time,
};

pub const RECENT_LEAVE_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub today: Option<AttendanceRecord>,
    pub recent_leave: Vec<LeaveRequest>,
}

impl DashboardData {
    pub fn build(records: &[AttendanceRecord], mut leave: Vec<LeaveRequest>, today: NaiveDate) -> Self {
        leave.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leave.truncate(RECENT_LEAVE_LIMIT);
        Self {
            today: find_today(records, today).cloned(),
            recent_leave: leave,
        }
    }

    pub fn status(&self) -> TodayStatus {
        TodayStatus::from_record(self.today.as_ref())
    }

    pub fn check_in_note(&self) -> String {
        match self.today.as_ref().and_then(|r| r.check_in_time) {
            Some(at) => format!("Checked in at {}", format_time(Some(at))),
            None => "Not checked in yet".to_string(),
        }
    }
}
