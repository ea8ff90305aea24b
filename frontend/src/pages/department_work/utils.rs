use crate::{
    api::{ApiError, DepartmentTask, TaskUpdateRequest},
    utils::filter::{filter_by_query, Searchable},
};

impl Searchable for DepartmentTask {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskTab {
    #[default]
    Active,
    Completed,
}

/// Tasks matching `query`, split by tab. Active tasks are ordered by due date, undated last.
pub fn tasks_for_tab(tasks: &[DepartmentTask], tab: TaskTab, query: &str) -> Vec<DepartmentTask> {
    let mut found: Vec<DepartmentTask> = filter_by_query(tasks, query)
        .into_iter()
        .filter(|task| task.is_completed() == (tab == TaskTab::Completed))
        .collect();
    match tab {
        TaskTab::Active => found.sort_by_key(|task| (task.due_date.is_none(), task.due_date)),
        TaskTab::Completed => found.sort_by(|a, b| b.completed_date.cmp(&a.completed_date)),
    }
    found
}

pub fn build_update(comment: &str, progress: u8) -> Result<TaskUpdateRequest, ApiError> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(ApiError::validation("Please provide an update comment"));
    }
    Ok(TaskUpdateRequest {
        comment: comment.to_string(),
        progress: progress.min(100),
    })
}

/// Tailwind tokens for the priority chip.
pub fn priority_classes(priority: &str) -> &'static str {
    match priority.trim().to_ascii_lowercase().as_str() {
        "high" => "bg-status-error-bg text-status-error-text",
        "medium" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-status-info-bg text-status-info-text",
    }
}
