pub mod recent_leave;
