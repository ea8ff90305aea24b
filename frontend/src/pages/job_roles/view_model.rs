use super::{
    repository::JobRolesRepository,
    utils::{build_application, JobBoard},
};
use crate::{
    api::{ApiError, CreateApplicationRequest, JobPosting},
    state::{
        auth::use_api_client,
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
    utils::filter::filter_by_query,
};
use leptos::*;

pub async fn load_board(repo: &JobRolesRepository) -> Result<JobBoard, ApiError> {
    let (jobs, applications) = futures::try_join!(repo.jobs(), repo.my_applications())?;
    Ok(JobBoard::new(jobs, applications))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyInput {
    pub request: CreateApplicationRequest,
    pub job_title: String,
}

#[derive(Clone, Copy)]
pub struct JobRolesViewModel {
    pub board: ViewResource<JobBoard>,
    pub search: RwSignal<String>,
    pub selected: RwSignal<Option<JobPosting>>,
    pub cover_letter: RwSignal<String>,
    pub apply_action: Action<ApplyInput, Result<Option<String>, ApiError>>,
    notifier: Notifier,
}

impl JobRolesViewModel {
    pub fn filtered_jobs(&self) -> Signal<Vec<JobPosting>> {
        let board = self.board.data();
        let search = self.search;
        Signal::derive(move || board.with(|b| search.with(|q| filter_by_query(&b.jobs, q))))
    }

    pub fn open(&self, job: JobPosting) {
        self.cover_letter.set(String::new());
        self.selected.set(Some(job));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }

    pub fn apply(&self) {
        if self.apply_action.pending().get_untracked() {
            return;
        }
        let Some(job) = self.selected.get_untracked() else {
            return;
        };
        match build_application(&job.id, &self.cover_letter.get_untracked()) {
            Ok(request) => self.apply_action.dispatch(ApplyInput {
                request,
                job_title: job.title,
            }),
            Err(err) => self.notifier.error(err.error),
        }
    }
}

pub fn use_job_roles_view_model() -> JobRolesViewModel {
    let repo = JobRolesRepository::new(use_api_client());
    let notifier = use_notifier();

    let board_repo = repo.clone();
    let board = ViewResource::on_mount(move || {
        let repo = board_repo.clone();
        async move { load_board(&repo).await }
    });

    let apply_action = create_action(move |input: &ApplyInput| {
        let repo = repo.clone();
        let input = input.clone();
        async move {
            let message = repo.apply(input.request).await?;
            Ok(Some(message.unwrap_or_else(|| {
                format!("Application submitted for {}", input.job_title)
            })))
        }
    });

    let selected = create_rw_signal(None::<JobPosting>);
    create_effect(move |_| {
        if report_mutation(apply_action.value().get(), notifier, "Application submitted") {
            selected.set(None);
            board.reload();
        }
    });

    JobRolesViewModel {
        board,
        search: create_rw_signal(String::new()),
        selected,
        cover_letter: create_rw_signal(String::new()),
        apply_action,
        notifier,
    }
}
