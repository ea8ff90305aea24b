use super::{
    repository::EmployeesRepository,
    utils::{Directory, EmployeeFormState},
};
use crate::{
    api::{ApiError, CreateEmployeeRequest, Employee, Role, UpdateEmployeeRequest},
    state::{
        auth::{use_api_client, use_auth},
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
};
use leptos::*;

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeMutation {
    Register(CreateEmployeeRequest),
    Update { id: String, request: UpdateEmployeeRequest },
    Delete { id: String },
}

pub async fn load_directory(repo: &EmployeesRepository) -> Result<Directory, ApiError> {
    let (employees, departments) = futures::try_join!(repo.employees(), repo.departments())?;
    Ok(Directory {
        employees,
        departments,
    })
}

pub async fn run_mutation(
    repo: &EmployeesRepository,
    mutation: EmployeeMutation,
) -> Result<Option<String>, ApiError> {
    let (result, fallback) = match mutation {
        EmployeeMutation::Register(request) => {
            (repo.register(request).await, "Employee added successfully!")
        }
        EmployeeMutation::Update { id, request } => (
            repo.update(&id, request).await,
            "Employee updated successfully!",
        ),
        EmployeeMutation::Delete { id } => {
            (repo.delete(&id).await, "Employee removed successfully!")
        }
    };
    result.map(|message| Some(message.unwrap_or_else(|| fallback.to_string())))
}

/// Which dialog the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Closed,
    Adding,
    Editing(Employee),
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub directory: ViewResource<Directory>,
    pub search: RwSignal<String>,
    pub department: RwSignal<String>,
    pub form: EmployeeFormState,
    pub editor: RwSignal<EditorMode>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub mutation: Action<EmployeeMutation, Result<Option<String>, ApiError>>,
    is_hr: Signal<bool>,
    notifier: Notifier,
}

impl EmployeesViewModel {
    pub fn filtered(&self) -> Signal<Vec<Employee>> {
        let directory = self.directory.data();
        let (search, department) = (self.search, self.department);
        Signal::derive(move || {
            directory.with(|dir| search.with(|q| department.with(|d| dir.filter(q, d))))
        })
    }

    pub fn department_options(&self) -> Signal<Vec<(String, String)>> {
        let directory = self.directory.data();
        Signal::derive(move || directory.with(Directory::department_options))
    }

    pub fn is_hr(&self) -> Signal<bool> {
        self.is_hr
    }

    pub fn open_add(&self) {
        if !self.is_hr.get_untracked() {
            self.notifier.error("Only HR administrators can add employees");
            return;
        }
        self.form.reset();
        self.editor.set(EditorMode::Adding);
    }

    pub fn open_edit(&self, employee: Employee) {
        self.form.fill_from(&employee);
        self.editor.set(EditorMode::Editing(employee));
    }

    pub fn close(&self) {
        self.editor.set(EditorMode::Closed);
    }

    pub fn submit(&self) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        let mutation = match self.editor.get_untracked() {
            EditorMode::Closed => return,
            EditorMode::Adding => self.form.to_create().map(EmployeeMutation::Register),
            EditorMode::Editing(employee) => self
                .form
                .to_update()
                .map(|request| EmployeeMutation::Update {
                    id: employee.id,
                    request,
                }),
        };
        match mutation {
            Ok(mutation) => self.mutation.dispatch(mutation),
            Err(err) => self.notifier.error(err.error),
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.mutation
                .dispatch(EmployeeMutation::Delete { id: employee.id });
        }
        self.pending_delete.set(None);
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let repo = EmployeesRepository::new(use_api_client());
    let notifier = use_notifier();
    let (auth, _) = use_auth();
    let is_hr = Signal::derive(move || auth.with(|state| state.role() == Some(Role::Hr)));

    let load_repo = repo.clone();
    let directory = ViewResource::on_mount(move || {
        let repo = load_repo.clone();
        async move { load_directory(&repo).await }
    });

    let mutation = create_action(move |mutation: &EmployeeMutation| {
        let repo = repo.clone();
        let mutation = mutation.clone();
        async move { run_mutation(&repo, mutation).await }
    });

    let editor = create_rw_signal(EditorMode::Closed);
    create_effect(move |_| {
        if report_mutation(mutation.value().get(), notifier, "Employee saved") {
            editor.set(EditorMode::Closed);
            directory.reload();
        }
    });

    EmployeesViewModel {
        directory,
        search: create_rw_signal(String::new()),
        department: create_rw_signal(String::new()),
        form: EmployeeFormState::default(),
        editor,
        pending_delete: create_rw_signal(None),
        mutation,
        is_hr,
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{department_json, employee_json, wrap};
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{employee_user, hr_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn directory_loads_and_filters_by_department() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(wrap(json!([
                employee_json("e1", "Ravi Menon", "Engineering"),
                employee_json("e2", "Nisha Rao", "Finance")
            ])));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/departments");
            then.status(200).json_body(wrap(json!([
                department_json("d-engineering", "Engineering"),
                department_json("d-finance", "Finance")
            ])));
        });
        let runtime = create_runtime();
        let user = hr_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_employees_view_model();
        vm.directory.load().await;

        assert_eq!(vm.filtered().get_untracked().len(), 2);
        assert_eq!(vm.department_options().get_untracked()[1].1, "Finance");
        vm.department.set("d-finance".into());
        assert_eq!(vm.filtered().get_untracked()[0].name, "Nisha Rao");
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_falls_back_to_default_message() {
        let server = MockServer::start_async().await;
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/e9");
            then.status(200).json_body(json!({}));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = EmployeesRepository::new(api);
        let message = run_mutation(&repo, EmployeeMutation::Delete { id: "e9".into() })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Employee removed successfully!"));
        delete.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn server_error_surfaces_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employees/register");
            then.status(409).json_body(json!({ "message": "Email already registered" }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = EmployeesRepository::new(api);
        let request = CreateEmployeeRequest {
            name: "Nisha Rao".into(),
            email: "nisha@example.com".into(),
            password: "Welcome#1".into(),
            phone: String::new(),
            position: String::new(),
            department: "d-finance".into(),
            address: String::new(),
            dob: None,
            salary: 48000.0,
            role: Role::Employee,
        };
        let err = run_mutation(&repo, EmployeeMutation::Register(request))
            .await
            .unwrap_err();
        assert_eq!(err.error, "Email already registered");
        runtime.dispose();
    }

    #[test]
    fn non_hr_cannot_open_add_dialog() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(employee_user()));
            let notifier = provide_notifier();
            let vm = use_employees_view_model();
            vm.open_add();
            assert_eq!(vm.editor.get_untracked(), EditorMode::Closed);
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "Only HR administrators can add employees"
            );
        });
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_employees_view_model();
            vm.open_add();
            vm.form.name.set("Nisha Rao".into());
            vm.submit();
            assert!(vm.mutation.value().get_untracked().is_none());
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "Please fill all required fields"
            );
        });
    }

    #[test]
    fn cancelled_delete_dispatches_nothing() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let vm = use_employees_view_model();
            let employee: Employee =
                serde_json::from_value(employee_json("e1", "Ravi Menon", "Engineering")).unwrap();
            vm.request_delete(employee);
            assert!(vm.pending_delete.get_untracked().is_some());
            vm.pending_delete.set(None);
            vm.confirm_delete();
            assert!(vm.mutation.value().get_untracked().is_none());
        });
    }
}
