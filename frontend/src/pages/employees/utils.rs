use crate::{
    api::{ApiError, CreateEmployeeRequest, Department, Employee, Role, UpdateEmployeeRequest},
    utils::{
        filter::{matches_query, matches_select, Searchable},
        time::parse_input_date,
    },
};
use leptos::*;

pub const EMPLOYEE_STATUSES: [&str; 3] = ["Active", "On Leave", "Terminated"];

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(phone) = self.phone.as_deref() {
            fields.push(phone);
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
}

impl Directory {
    /// `department` is a department id; blank matches everyone.
    pub fn filter(&self, query: &str, department: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| matches_query(*e, query))
            .filter(|e| matches_select(e.department_id().unwrap_or_default(), department))
            .cloned()
            .collect()
    }

    pub fn department_options(&self) -> Vec<(String, String)> {
        self.departments
            .iter()
            .map(|d| (d.id.clone(), d.department_name.clone()))
            .collect()
    }
}

/// Add and edit form. Every field is kept as raw input text.
#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub position: RwSignal<String>,
    pub department: RwSignal<String>,
    pub address: RwSignal<String>,
    pub dob: RwSignal<String>,
    pub salary: RwSignal<String>,
    pub role: RwSignal<String>,
    pub password: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            position: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
            dob: create_rw_signal(String::new()),
            salary: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee.as_str().to_string()),
            password: create_rw_signal(String::new()),
            status: create_rw_signal(EMPLOYEE_STATUSES[0].to_string()),
        }
    }
}

impl EmployeeFormState {
    pub fn reset(&self) {
        for field in [
            self.name,
            self.email,
            self.phone,
            self.position,
            self.department,
            self.address,
            self.dob,
            self.salary,
            self.password,
        ] {
            field.set(String::new());
        }
        self.role.set(Role::Employee.as_str().to_string());
        self.status.set(EMPLOYEE_STATUSES[0].to_string());
    }

    pub fn fill_from(&self, employee: &Employee) {
        self.name.set(employee.name.clone());
        self.email.set(employee.email.clone());
        self.phone.set(employee.phone.clone().unwrap_or_default());
        self.position.set(employee.position.clone().unwrap_or_default());
        self.department
            .set(employee.department_id().unwrap_or_default().to_string());
        self.address.set(employee.address.clone().unwrap_or_default());
        self.dob.set(
            employee
                .dob
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        self.salary
            .set(employee.salary.map(|s| s.to_string()).unwrap_or_default());
        self.role
            .set(employee.role.unwrap_or(Role::Employee).as_str().to_string());
        self.password.set(String::new());
        self.status.set(employee.status_label().to_string());
    }

    fn snapshot(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            position: self.position.get_untracked(),
            department: self.department.get_untracked(),
            address: self.address.get_untracked(),
            dob: self.dob.get_untracked(),
            salary: self.salary.get_untracked(),
            role: self.role.get_untracked(),
            password: self.password.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn to_create(&self) -> Result<CreateEmployeeRequest, ApiError> {
        self.snapshot().to_create()
    }

    pub fn to_update(&self) -> Result<UpdateEmployeeRequest, ApiError> {
        self.snapshot().to_update()
    }
}

/// Plain copy of the form values, validated without a reactive runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
    pub dob: String,
    pub salary: String,
    pub role: String,
    pub password: String,
    pub status: String,
}

struct CommonFields {
    name: String,
    email: String,
    department: String,
    salary: f64,
    role: Role,
}

impl EmployeeInput {
    fn common(&self) -> Result<CommonFields, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let department = self.department.trim();
        if name.is_empty() || email.is_empty() || department.is_empty() || self.salary.trim().is_empty() {
            return Err(ApiError::validation("Please fill all required fields"));
        }
        if !email.contains('@') {
            return Err(ApiError::validation("Please enter a valid email address"));
        }
        let salary = self
            .salary
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
            .ok_or_else(|| ApiError::validation("Salary must be a non-negative number"))?;
        Ok(CommonFields {
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            salary,
            role: Role::parse(&self.role).unwrap_or(Role::Employee),
        })
    }

    pub fn to_create(&self) -> Result<CreateEmployeeRequest, ApiError> {
        let common = self.common()?;
        if self.password.is_empty() {
            return Err(ApiError::validation("Please set an initial password"));
        }
        let dob = match self.dob.trim() {
            "" => None,
            raw => Some(
                parse_input_date(raw)
                    .ok_or_else(|| ApiError::validation("Please enter a valid date of birth"))?,
            ),
        };
        Ok(CreateEmployeeRequest {
            name: common.name,
            email: common.email,
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            position: self.position.trim().to_string(),
            department: common.department,
            address: self.address.trim().to_string(),
            dob,
            salary: common.salary,
            role: common.role,
        })
    }

    pub fn to_update(&self) -> Result<UpdateEmployeeRequest, ApiError> {
        let common = self.common()?;
        Ok(UpdateEmployeeRequest {
            name: common.name,
            email: common.email,
            phone: self.phone.trim().to_string(),
            position: self.position.trim().to_string(),
            department: common.department,
            address: self.address.trim().to_string(),
            salary: common.salary,
            role: common.role,
            status: match self.status.trim() {
                "" => EMPLOYEE_STATUSES[0].to_string(),
                status => status.to_string(),
            },
        })
    }
}
