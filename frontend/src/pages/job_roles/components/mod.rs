pub mod applications;
pub mod apply_dialog;
pub mod job_list;
