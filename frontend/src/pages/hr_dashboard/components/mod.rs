pub mod departments;
pub mod recent_applications;
