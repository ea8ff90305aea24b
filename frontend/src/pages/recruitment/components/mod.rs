pub mod application_dialog;
pub mod applications;
pub mod job_form;
pub mod postings;
