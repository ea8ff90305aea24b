use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::Role,
    components::{guard::RequireRole, layout::Layout, toaster::Toaster},
    pages::{
        attendance::AttendancePage, dashboard::DashboardPage,
        department_work::DepartmentWorkPage, employees::EmployeesPage,
        hr_dashboard::HrDashboardPage, job_roles::JobRolesPage,
        leave_management::LeaveManagementPage, leave_requests::LeaveRequestsPage,
        login::LoginPage, not_found::NotFoundPage, payroll::PayrollPage,
        recruitment::RecruitmentPage,
    },
    state::{auth::AuthProvider, notify::provide_notifier},
};

pub mod paths {
    pub const LOGIN: &str = "/";
    pub const EMPLOYEE_HOME: &str = "/dashboard";
    pub const ATTENDANCE: &str = "/dashboard/attendance";
    pub const LEAVE_REQUESTS: &str = "/dashboard/leave-requests";
    pub const JOB_ROLES: &str = "/dashboard/job-roles";
    pub const DEPARTMENT_WORK: &str = "/dashboard/department-work";
    pub const HR_HOME: &str = "/hr-dashboard";
    pub const EMPLOYEES: &str = "/hr-dashboard/employees";
    pub const RECRUITMENT: &str = "/hr-dashboard/recruitment";
    pub const LEAVE_MANAGEMENT: &str = "/hr-dashboard/leave-management";
    pub const PAYROLL: &str = "/hr-dashboard/payroll";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    /// `None` for public routes.
    pub role: Option<Role>,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: paths::LOGIN, label: "Sign in", role: None },
    RouteEntry { path: paths::EMPLOYEE_HOME, label: "Dashboard", role: Some(Role::Employee) },
    RouteEntry { path: paths::ATTENDANCE, label: "Attendance", role: Some(Role::Employee) },
    RouteEntry { path: paths::LEAVE_REQUESTS, label: "Leave Requests", role: Some(Role::Employee) },
    RouteEntry { path: paths::JOB_ROLES, label: "Job Roles", role: Some(Role::Employee) },
    RouteEntry { path: paths::DEPARTMENT_WORK, label: "Department Work", role: Some(Role::Employee) },
    RouteEntry { path: paths::HR_HOME, label: "Dashboard", role: Some(Role::Hr) },
    RouteEntry { path: paths::EMPLOYEES, label: "Employees", role: Some(Role::Hr) },
    RouteEntry { path: paths::RECRUITMENT, label: "Recruitment", role: Some(Role::Hr) },
    RouteEntry { path: paths::LEAVE_MANAGEMENT, label: "Leave Management", role: Some(Role::Hr) },
    RouteEntry { path: paths::PAYROLL, label: "Payroll", role: Some(Role::Hr) },
];

pub fn required_role(path: &str) -> Option<Role> {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        other => other,
    };
    ROUTES
        .iter()
        .find(|entry| entry.path == trimmed)
        .and_then(|entry| entry.role)
}

/// Sidebar entries for a role, in display order.
pub fn navigation_for(role: Role) -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(move |entry| entry.role == Some(role))
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_notifier();
    view! {
        <Title text="WorkWise HRMS"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=paths::LOGIN view=LoginPage/>
                    <Route path=paths::EMPLOYEE_HOME view=EmployeeShell>
                        <Route path="" view=DashboardPage/>
                        <Route path="attendance" view=AttendancePage/>
                        <Route path="leave-requests" view=LeaveRequestsPage/>
                        <Route path="job-roles" view=JobRolesPage/>
                        <Route path="department-work" view=DepartmentWorkPage/>
                    </Route>
                    <Route path=paths::HR_HOME view=HrShell>
                        <Route path="" view=HrDashboardPage/>
                        <Route path="employees" view=EmployeesPage/>
                        <Route path="recruitment" view=RecruitmentPage/>
                        <Route path="leave-management" view=LeaveManagementPage/>
                        <Route path="payroll" view=PayrollPage/>
                    </Route>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
            <Toaster/>
        </AuthProvider>
    }
}

#[component]
fn EmployeeShell() -> impl IntoView {
    view! {
        <RequireRole role=Role::Employee>
            <Layout><Outlet/></Layout>
        </RequireRole>
    }
}

#[component]
fn HrShell() -> impl IntoView {
    view! {
        <RequireRole role=Role::Hr>
            <Layout><Outlet/></Layout>
        </RequireRole>
    }
}
