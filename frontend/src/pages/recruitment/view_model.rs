use super::{
    repository::RecruitmentRepository,
    utils::{acceptance, filter_applications, interview, rejection, JobFormState},
};
use crate::{
    api::{
        ApiError, ApplicationDecisionRequest, ApplicationStatus, CreateJobRequest, Department,
        JobApplication, JobPosting,
    },
    state::{
        auth::use_api_client,
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruitmentTab {
    Applications,
    Postings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitmentData {
    pub applications: Vec<JobApplication>,
    pub jobs: Vec<JobPosting>,
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecruitmentMutation {
    Decide {
        application_id: String,
        decision: ApplicationDecisionRequest,
    },
    CreateJob(CreateJobRequest),
}

impl RecruitmentMutation {
    fn default_message(&self) -> &'static str {
        match self {
            RecruitmentMutation::Decide { decision, .. } => match decision.status {
                ApplicationStatus::Accepted => "Candidate accepted! Offer letter will be sent.",
                ApplicationStatus::Rejected => {
                    "Candidate rejected. Notification email will be sent."
                }
                ApplicationStatus::Interview => "Interview scheduled successfully!",
                _ => "Application updated",
            },
            RecruitmentMutation::CreateJob(_) => "New job posting created successfully!",
        }
    }
}

pub async fn load_recruitment(repo: &RecruitmentRepository) -> Result<RecruitmentData, ApiError> {
    let (applications, jobs, departments) =
        futures::try_join!(repo.applications(), repo.jobs(), repo.departments())?;
    Ok(RecruitmentData {
        applications,
        jobs,
        departments,
    })
}

pub async fn run_mutation(
    repo: &RecruitmentRepository,
    mutation: RecruitmentMutation,
) -> Result<Option<String>, ApiError> {
    let fallback = mutation.default_message();
    let result = match mutation {
        RecruitmentMutation::Decide {
            application_id,
            decision,
        } => repo.decide(&application_id, decision).await,
        RecruitmentMutation::CreateJob(request) => repo.create_job(request).await,
    };
    result.map(|message| Some(message.unwrap_or_else(|| fallback.to_string())))
}

#[derive(Clone, Copy)]
pub struct RecruitmentViewModel {
    pub data: ViewResource<RecruitmentData>,
    pub tab: RwSignal<RecruitmentTab>,
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
    pub selected: RwSignal<Option<JobApplication>>,
    pub rejection_reason: RwSignal<String>,
    pub interview_date: RwSignal<String>,
    pub job_form: JobFormState,
    pub job_dialog_open: RwSignal<bool>,
    pub mutation: Action<RecruitmentMutation, Result<Option<String>, ApiError>>,
    notifier: Notifier,
}

impl RecruitmentViewModel {
    pub fn filtered_applications(&self) -> Signal<Vec<JobApplication>> {
        let data = self.data.data();
        let (search, status) = (self.search, self.status);
        Signal::derive(move || {
            data.with(|d| search.with(|q| status.with(|s| filter_applications(&d.applications, q, s))))
        })
    }

    pub fn jobs(&self) -> Signal<Vec<JobPosting>> {
        let data = self.data.data();
        Signal::derive(move || data.with(|d| d.jobs.clone()))
    }

    pub fn department_options(&self) -> Signal<Vec<(String, String)>> {
        let data = self.data.data();
        Signal::derive(move || {
            data.with(|d| {
                d.departments
                    .iter()
                    .map(|dept| (dept.department_name.clone(), dept.department_name.clone()))
                    .collect()
            })
        })
    }

    pub fn open(&self, application: JobApplication) {
        self.rejection_reason.set(String::new());
        self.interview_date.set(String::new());
        self.selected.set(Some(application));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }

    fn decide(&self, decision: Result<ApplicationDecisionRequest, ApiError>) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        let Some(application) = self.selected.get_untracked() else {
            return;
        };
        match decision {
            Ok(decision) => self.mutation.dispatch(RecruitmentMutation::Decide {
                application_id: application.id,
                decision,
            }),
            Err(err) => self.notifier.error(err.error),
        }
    }

    pub fn accept(&self) {
        self.decide(Ok(acceptance()));
    }

    pub fn reject(&self) {
        self.decide(rejection(&self.rejection_reason.get_untracked()));
    }

    pub fn schedule_interview(&self) {
        self.decide(interview(&self.interview_date.get_untracked()));
    }

    pub fn open_job_form(&self) {
        self.job_form.reset();
        self.job_dialog_open.set(true);
    }

    pub fn create_job(&self) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        match self.job_form.to_request() {
            Ok(request) => self.mutation.dispatch(RecruitmentMutation::CreateJob(request)),
            Err(err) => self.notifier.error(err.error),
        }
    }
}

pub fn use_recruitment_view_model() -> RecruitmentViewModel {
    let repo = RecruitmentRepository::new(use_api_client());
    let notifier = use_notifier();

    let load_repo = repo.clone();
    let data = ViewResource::on_mount(move || {
        let repo = load_repo.clone();
        async move { load_recruitment(&repo).await }
    });

    let mutation = create_action(move |mutation: &RecruitmentMutation| {
        let repo = repo.clone();
        let mutation = mutation.clone();
        async move { run_mutation(&repo, mutation).await }
    });

    let selected = create_rw_signal(None::<JobApplication>);
    let job_dialog_open = create_rw_signal(false);
    create_effect(move |_| {
        if report_mutation(mutation.value().get(), notifier, "Recruitment updated") {
            selected.set(None);
            job_dialog_open.set(false);
            data.reload();
        }
    });

    RecruitmentViewModel {
        data,
        tab: create_rw_signal(RecruitmentTab::Applications),
        search: create_rw_signal(String::new()),
        status: create_rw_signal(String::new()),
        selected,
        rejection_reason: create_rw_signal(String::new()),
        interview_date: create_rw_signal(String::new()),
        job_form: JobFormState::default(),
        job_dialog_open,
        mutation,
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{application_json, department_json, job_json, wrap};
    use crate::pages::recruitment::utils::JobInput;
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{hr_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    fn mock_lists(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/recruitment/applications");
            then.status(200).json_body(wrap(json!([
                application_json("a1", "Meera", "New"),
                application_json("a2", "Karan", "Interview")
            ])));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/recruitment/jobs");
            then.status(200)
                .json_body(wrap(json!([job_json("j1", "Backend Engineer", "Active")])));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/departments");
            then.status(200)
                .json_body(wrap(json!([department_json("d1", "Engineering")])));
        });
    }

    #[tokio::test]
    async fn loads_applications_jobs_and_departments() {
        let server = MockServer::start_async().await;
        mock_lists(&server);
        let runtime = create_runtime();
        let user = hr_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_recruitment_view_model();
        vm.data.load().await;

        assert_eq!(vm.filtered_applications().get_untracked().len(), 2);
        assert_eq!(vm.jobs().get_untracked()[0].title, "Backend Engineer");
        assert_eq!(
            vm.department_options().get_untracked(),
            vec![("Engineering".to_string(), "Engineering".to_string())]
        );
        vm.status.set("Interview".into());
        assert_eq!(vm.filtered_applications().get_untracked()[0].id, "a2");
        runtime.dispose();
    }

    #[tokio::test]
    async fn interview_decision_carries_date() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/recruitment/applications/a1")
                .json_body(json!({ "status": "Interview", "interviewDate": "2025-02-14" }));
            then.status(200).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = RecruitmentRepository::new(api);
        let message = run_mutation(
            &repo,
            RecruitmentMutation::Decide {
                application_id: "a1".into(),
                decision: interview("2025-02-14").unwrap(),
            },
        )
        .await
        .unwrap();
        assert_eq!(message.as_deref(), Some("Interview scheduled successfully!"));
        put.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn job_creation_posts_form() {
        let server = MockServer::start_async().await;
        let post = server.mock(|when, then| {
            when.method(POST)
                .path("/api/recruitment/jobs")
                .json_body_partial(r#"{ "title": "Data Analyst", "type": "Contract" }"#);
            then.status(201).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = RecruitmentRepository::new(api);
        let request = JobInput {
            title: "Data Analyst".into(),
            department: "Finance".into(),
            location: "Pune".into(),
            employment_type: "Contract".into(),
            deadline: "2025-03-31".into(),
            description: "Own reporting".into(),
            ..Default::default()
        }
        .to_request()
        .unwrap();
        let message = run_mutation(&repo, RecruitmentMutation::CreateJob(request))
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("New job posting created successfully!"));
        post.assert_async().await;
        runtime.dispose();
    }

    #[test]
    fn reject_without_reason_stays_local() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_recruitment_view_model();
            vm.open(serde_json::from_value(application_json("a1", "Meera", "New")).unwrap());
            vm.reject();
            vm.schedule_interview();
            assert!(vm.mutation.value().get_untracked().is_none());
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts[0].message, "Please provide a reason for rejection");
            assert_eq!(toasts[1].message, "Please select an interview date");
        });
    }

    #[test]
    fn incomplete_job_form_is_not_posted() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_recruitment_view_model();
            vm.open_job_form();
            vm.job_form.title.set("Data Analyst".into());
            vm.create_job();
            assert!(vm.mutation.value().get_untracked().is_none());
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "Please fill all required fields"
            );
        });
    }
}
