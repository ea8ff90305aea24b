pub mod attendance;
pub mod dashboard;
pub mod department_work;
pub mod employees;
pub mod hr_dashboard;
pub mod job_roles;
pub mod leave_management;
pub mod leave_requests;
pub mod login;
pub mod not_found;
pub mod payroll;
pub mod recruitment;
