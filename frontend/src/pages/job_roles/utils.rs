use crate::{
    api::{ApiError, CreateApplicationRequest, JobApplication, JobPosting},
    utils::filter::Searchable,
};

impl Searchable for JobPosting {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.department, &self.location]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobBoard {
    pub jobs: Vec<JobPosting>,
    pub applications: Vec<JobApplication>,
}

impl JobBoard {
    /// Keeps open postings only.
    pub fn new(jobs: Vec<JobPosting>, applications: Vec<JobApplication>) -> Self {
        Self {
            jobs: jobs.into_iter().filter(JobPosting::is_open).collect(),
            applications,
        }
    }

    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applications
            .iter()
            .any(|app| app.job_id.as_deref() == Some(job_id))
    }
}

pub fn build_application(job_id: &str, cover_letter: &str) -> Result<CreateApplicationRequest, ApiError> {
    let cover_letter = cover_letter.trim();
    if cover_letter.is_empty() {
        return Err(ApiError::validation("Please provide a cover letter"));
    }
    Ok(CreateApplicationRequest {
        job_id: job_id.to_string(),
        cover_letter: cover_letter.to_string(),
    })
}
