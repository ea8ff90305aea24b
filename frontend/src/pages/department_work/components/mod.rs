pub mod task_dialog;
pub mod task_list;
