use super::{
    repository::DepartmentWorkRepository,
    utils::{build_update, tasks_for_tab, TaskTab},
};
use crate::{
    api::{ApiError, DepartmentTask, TaskUpdateRequest},
    state::{
        auth::use_api_client,
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMutation {
    Update { task_id: String, update: TaskUpdateRequest },
    Complete { task_id: String },
}

pub async fn run_mutation(
    repo: &DepartmentWorkRepository,
    mutation: TaskMutation,
) -> Result<Option<String>, ApiError> {
    let (result, fallback) = match mutation {
        TaskMutation::Update { task_id, update } => (
            repo.post_update(&task_id, update).await,
            "Task update submitted successfully",
        ),
        TaskMutation::Complete { task_id } => {
            (repo.complete(&task_id).await, "Task marked as complete")
        }
    };
    result.map(|message| Some(message.unwrap_or_else(|| fallback.to_string())))
}

#[derive(Clone, Copy)]
pub struct DepartmentWorkViewModel {
    pub tasks: ViewResource<Vec<DepartmentTask>>,
    pub tab: RwSignal<TaskTab>,
    pub search: RwSignal<String>,
    pub selected: RwSignal<Option<DepartmentTask>>,
    pub comment: RwSignal<String>,
    pub progress: RwSignal<u8>,
    pub mutation: Action<TaskMutation, Result<Option<String>, ApiError>>,
    notifier: Notifier,
}

impl DepartmentWorkViewModel {
    pub fn visible_tasks(&self) -> Signal<Vec<DepartmentTask>> {
        let tasks = self.tasks.data();
        let (tab, search) = (self.tab, self.search);
        Signal::derive(move || {
            let tab = tab.get();
            tasks.with(|all| search.with(|q| tasks_for_tab(all, tab, q)))
        })
    }

    pub fn open(&self, task: DepartmentTask) {
        self.comment.set(String::new());
        self.progress.set(task.progress);
        self.selected.set(Some(task));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }

    /// Posts a progress update, or completes the task once progress reaches 100.
    pub fn submit(&self) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        let Some(task) = self.selected.get_untracked() else {
            return;
        };
        let progress = self.progress.get_untracked();
        if progress >= 100 {
            self.mutation.dispatch(TaskMutation::Complete { task_id: task.id });
            return;
        }
        match build_update(&self.comment.get_untracked(), progress) {
            Ok(update) => self.mutation.dispatch(TaskMutation::Update {
                task_id: task.id,
                update,
            }),
            Err(err) => self.notifier.error(err.error),
        }
    }
}

pub fn use_department_work_view_model() -> DepartmentWorkViewModel {
    let repo = DepartmentWorkRepository::new(use_api_client());
    let notifier = use_notifier();

    let list_repo = repo.clone();
    let tasks = ViewResource::on_mount(move || {
        let repo = list_repo.clone();
        async move { repo.tasks().await }
    });

    let mutation = create_action(move |mutation: &TaskMutation| {
        let repo = repo.clone();
        let mutation = mutation.clone();
        async move { run_mutation(&repo, mutation).await }
    });

    let selected = create_rw_signal(None::<DepartmentTask>);
    create_effect(move |_| {
        if report_mutation(mutation.value().get(), notifier, "Task updated") {
            selected.set(None);
            tasks.reload();
        }
    });

    DepartmentWorkViewModel {
        tasks,
        tab: create_rw_signal(TaskTab::Active),
        search: create_rw_signal(String::new()),
        selected,
        comment: create_rw_signal(String::new()),
        progress: create_rw_signal(0),
        mutation,
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{task_json, wrap};
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{employee_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn tabs_split_loaded_tasks() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks/me");
            then.status(200).json_body(wrap(json!([
                task_json("t1", "Audit report", "In Progress", 40),
                task_json("t2", "Onboarding deck", "Completed", 100)
            ])));
        });
        let runtime = create_runtime();
        let user = employee_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_department_work_view_model();
        vm.tasks.load().await;

        assert_eq!(vm.visible_tasks().get_untracked()[0].id, "t1");
        vm.tab.set(TaskTab::Completed);
        assert_eq!(vm.visible_tasks().get_untracked()[0].id, "t2");
        runtime.dispose();
    }

    #[tokio::test]
    async fn update_posts_comment_and_progress() {
        let server = MockServer::start_async().await;
        let post = server.mock(|when, then| {
            when.method(POST)
                .path("/api/tasks/t1/updates")
                .json_body(json!({ "comment": "Draft ready", "progress": 60 }));
            then.status(201).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &employee_user());
        let repo = DepartmentWorkRepository::new(api);
        let message = run_mutation(
            &repo,
            TaskMutation::Update {
                task_id: "t1".into(),
                update: TaskUpdateRequest {
                    comment: "Draft ready".into(),
                    progress: 60,
                },
            },
        )
        .await
        .unwrap();
        assert_eq!(message.as_deref(), Some("Task update submitted successfully"));
        post.assert_async().await;
        runtime.dispose();
    }

    #[test]
    fn blank_comment_is_rejected_locally() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(employee_user()));
            let notifier = provide_notifier();
            let vm = use_department_work_view_model();
            vm.selected.set(serde_json::from_value(task_json("t1", "Audit", "Pending", 10)).ok());
            vm.progress.set(30);
            vm.submit();
            assert!(vm.mutation.value().get_untracked().is_none());
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "Please provide an update comment"
            );
        });
    }
}
