use super::{repository::DashboardRepository, utils::DashboardData};
use crate::{
    api::ApiError,
    state::{
        auth::{current_user_id, use_api_client},
        view::ViewResource,
    },
    utils::time::today_in_app_tz,
};
use chrono::NaiveDate;

pub async fn load_dashboard(
    repo: &DashboardRepository,
    employee_id: Option<String>,
    today: NaiveDate,
) -> Result<DashboardData, ApiError> {
    let employee_id = employee_id.ok_or_else(ApiError::unauthorized)?;
    let (records, leave) = futures::try_join!(
        repo.attendance(&employee_id),
        repo.leave_requests(&employee_id)
    )?;
    Ok(DashboardData::build(&records, leave, today))
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: ViewResource<DashboardData>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let repo = DashboardRepository::new(use_api_client());
    let employee_id = current_user_id();
    let data = ViewResource::on_mount(move || {
        let repo = repo.clone();
        let employee_id = employee_id.clone();
        async move { load_dashboard(&repo, employee_id, today_in_app_tz()).await }
    });
    DashboardViewModel { data }
}
