use super::{
    repository::HrDashboardRepository,
    utils::{HrOverview, OverviewInput},
};
use crate::{
    api::ApiError,
    state::{auth::use_api_client, view::ViewResource},
    utils::time::today_in_app_tz,
};

pub async fn load_overview(repo: &HrDashboardRepository) -> Result<HrOverview, ApiError> {
    let (employees, departments, jobs, leave, applications) = futures::try_join!(
        repo.employees(),
        repo.departments(),
        repo.jobs(),
        repo.leave_requests(),
        repo.applications()
    )?;
    Ok(HrOverview::build(
        OverviewInput {
            employees,
            departments,
            jobs,
            leave,
            applications,
        },
        today_in_app_tz(),
    ))
}

#[derive(Clone, Copy)]
pub struct HrDashboardViewModel {
    pub overview: ViewResource<HrOverview>,
}

pub fn use_hr_dashboard_view_model() -> HrDashboardViewModel {
    let repo = HrDashboardRepository::new(use_api_client());
    let overview = ViewResource::on_mount(move || {
        let repo = repo.clone();
        async move { load_overview(&repo).await }
    });
    HrDashboardViewModel { overview }
}
