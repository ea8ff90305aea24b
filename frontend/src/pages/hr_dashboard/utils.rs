use chrono::NaiveDate;

use crate::api::{
    Department, Employee, JobApplication, JobPosting, LeaveRequest, LeaveStatus,
};

const RECENT_APPLICATIONS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrStats {
    pub total_employees: usize,
    pub open_positions: usize,
    pub pending_leave: usize,
    pub absent_today: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCount {
    pub name: String,
    pub employees: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrOverview {
    pub stats: HrStats,
    pub departments: Vec<DepartmentCount>,
    pub recent_applications: Vec<JobApplication>,
}

pub struct OverviewInput {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub jobs: Vec<JobPosting>,
    pub leave: Vec<LeaveRequest>,
    pub applications: Vec<JobApplication>,
}

/// Approved leave whose range covers `today`.
pub fn is_absent_on(leave: &LeaveRequest, today: NaiveDate) -> bool {
    leave.status == LeaveStatus::Approved
        && matches!(
            (leave.start_date, leave.end_date.or(leave.start_date)),
            (Some(start), Some(end)) if start <= today && today <= end
        )
}

/// Employee headcount per department, largest first.
pub fn department_counts(departments: &[Department], employees: &[Employee]) -> Vec<DepartmentCount> {
    let mut counts: Vec<DepartmentCount> = departments
        .iter()
        .map(|dept| DepartmentCount {
            name: dept.department_name.clone(),
            employees: employees
                .iter()
                .filter(|e| e.department_id() == Some(dept.id.as_str()))
                .count(),
        })
        .collect();
    counts.sort_by(|a, b| b.employees.cmp(&a.employees).then_with(|| a.name.cmp(&b.name)));
    counts
}

impl HrOverview {
    pub fn build(input: OverviewInput, today: NaiveDate) -> Self {
        let stats = HrStats {
            total_employees: input.employees.len(),
            open_positions: input.jobs.iter().filter(|j| j.is_open()).count(),
            pending_leave: input
                .leave
                .iter()
                .filter(|l| l.status == LeaveStatus::Pending)
                .count(),
            absent_today: input.leave.iter().filter(|l| is_absent_on(l, today)).count(),
        };
        let mut recent_applications = input.applications;
        recent_applications.sort_by(|a, b| b.apply_date.cmp(&a.apply_date));
        recent_applications.truncate(RECENT_APPLICATIONS);
        Self {
            stats,
            departments: department_counts(&input.departments, &input.employees),
            recent_applications,
        }
    }
}
