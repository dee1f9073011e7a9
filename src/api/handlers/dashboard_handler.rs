//! Admin dashboard handler.

use axum::{extract::State, response::Json, routing::get, Extension, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{EmployeeResponse, WorkRecordResponse};
use crate::errors::AppResult;
use crate::services::AdminDashboard;

/// Aggregate statistics for the admin landing page
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboardResponse {
    /// Number of employees on payroll
    #[schema(example = 12)]
    pub employee_count: u64,
    /// Number of work records overall
    #[schema(example = 348)]
    pub record_count: u64,
    /// Work records dated today
    #[schema(example = 7)]
    pub today_records: u64,
    /// Sum of all amounts earned
    #[schema(example = 41820.5)]
    pub total_payments: f64,
    /// Newest work records
    pub recent_records: Vec<WorkRecordResponse>,
    /// All employees ordered by name
    pub employees: Vec<EmployeeResponse>,
}

impl From<AdminDashboard> for AdminDashboardResponse {
    fn from(dashboard: AdminDashboard) -> Self {
        Self {
            employee_count: dashboard.employee_count,
            record_count: dashboard.record_count,
            today_records: dashboard.today_records,
            total_payments: dashboard.total_payments,
            recent_records: dashboard
                .recent_records
                .into_iter()
                .map(Into::into)
                .collect(),
            employees: dashboard.employees.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create admin dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(admin_dashboard))
}

/// Company-wide counters plus the newest records and all employees
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "Dashboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AdminDashboardResponse>> {
    require_admin(&user)?;

    let dashboard = state.dashboard_service.admin_dashboard().await?;

    Ok(Json(dashboard.into()))
}
