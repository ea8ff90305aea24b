use crate::{
    api::{ApiError, ApplicationDecisionRequest, ApplicationStatus, CreateJobRequest, JobApplication},
    utils::{
        filter::{matches_query, matches_select, Searchable},
        time::parse_input_date,
    },
};
use leptos::*;

pub const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];

impl Searchable for JobApplication {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.position.as_str(), self.email.as_str()]
    }
}

/// `status` is an [`ApplicationStatus`] label; blank matches all.
pub fn filter_applications(
    applications: &[JobApplication],
    query: &str,
    status: &str,
) -> Vec<JobApplication> {
    applications
        .iter()
        .filter(|a| matches_query(*a, query))
        .filter(|a| matches_select(a.status.label(), status))
        .cloned()
        .collect()
}

pub fn acceptance() -> ApplicationDecisionRequest {
    ApplicationDecisionRequest {
        status: ApplicationStatus::Accepted,
        interview_date: None,
        rejection_reason: None,
    }
}

pub fn rejection(reason: &str) -> Result<ApplicationDecisionRequest, ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::validation("Please provide a reason for rejection"));
    }
    Ok(ApplicationDecisionRequest {
        status: ApplicationStatus::Rejected,
        interview_date: None,
        rejection_reason: Some(reason.to_string()),
    })
}

pub fn interview(date: &str) -> Result<ApplicationDecisionRequest, ApiError> {
    let interview_date = parse_input_date(date)
        .ok_or_else(|| ApiError::validation("Please select an interview date"))?;
    Ok(ApplicationDecisionRequest {
        status: ApplicationStatus::Interview,
        interview_date: Some(interview_date),
        rejection_reason: None,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobInput {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub deadline: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
}

impl JobInput {
    pub fn to_request(&self) -> Result<CreateJobRequest, ApiError> {
        let required = [
            &self.title,
            &self.department,
            &self.location,
            &self.employment_type,
            &self.deadline,
            &self.description,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ApiError::validation("Please fill all required fields"));
        }
        let deadline = parse_input_date(&self.deadline)
            .ok_or_else(|| ApiError::validation("Please enter a valid deadline"))?;
        Ok(CreateJobRequest {
            title: self.title.trim().to_string(),
            department: self.department.trim().to_string(),
            location: self.location.trim().to_string(),
            employment_type: self.employment_type.trim().to_string(),
            deadline,
            description: self.description.trim().to_string(),
            requirements: self
                .requirements
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            salary: Some(self.salary.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Clone, Copy)]
pub struct JobFormState {
    pub title: RwSignal<String>,
    pub department: RwSignal<String>,
    pub location: RwSignal<String>,
    pub employment_type: RwSignal<String>,
    pub deadline: RwSignal<String>,
    pub description: RwSignal<String>,
    pub requirements: RwSignal<String>,
    pub salary: RwSignal<String>,
}

impl Default for JobFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            location: create_rw_signal(String::new()),
            employment_type: create_rw_signal(String::new()),
            deadline: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            requirements: create_rw_signal(String::new()),
            salary: create_rw_signal(String::new()),
        }
    }
}

impl JobFormState {
    fn fields(&self) -> [RwSignal<String>; 8] {
        [
            self.title,
            self.department,
            self.location,
            self.employment_type,
            self.deadline,
            self.description,
            self.requirements,
            self.salary,
        ]
    }

    pub fn reset(&self) {
        for field in self.fields() {
            field.set(String::new());
        }
    }

    pub fn to_request(&self) -> Result<CreateJobRequest, ApiError> {
        JobInput {
            title: self.title.get_untracked(),
            department: self.department.get_untracked(),
            location: self.location.get_untracked(),
            employment_type: self.employment_type.get_untracked(),
            deadline: self.deadline.get_untracked(),
            description: self.description.get_untracked(),
            requirements: self.requirements.get_untracked(),
            salary: self.salary.get_untracked(),
        }
        .to_request()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::application_json;

    #[test]
    fn applications_filter_by_text_and_status() {
        let apps: Vec<JobApplication> = [
            application_json("a1", "Meera", "New"),
            application_json("a2", "Karan", "In Review"),
            application_json("a3", "Leela", "Rejected"),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();
        assert_eq!(filter_applications(&apps, "", "").len(), 3);
        assert_eq!(filter_applications(&apps, "", "In Review")[0].id, "a2");
        assert_eq!(filter_applications(&apps, "leela@", "")[0].id, "a3");
        assert_eq!(filter_applications(&apps, "backend", "New").len(), 1);
        assert!(filter_applications(&apps, "meera", "Rejected").is_empty());
    }
}
