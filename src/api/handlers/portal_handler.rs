//! Employee self-service handlers.
//!
//! Everything here is scoped to the caller's own employee record,
//! taken from the authenticated claims. Admin accounts have no
//! employee link and are rejected with Forbidden.

use axum::{
    extract::{Path, State},
    response::{Json, Response},
    routing::get,
    Extension, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{EmployeeProfile, ReportKind, ReportResponse, WorkRecordResponse};
use crate::errors::AppResult;
use crate::services::EmployeeDashboard;
use crate::types::Created;

use super::report_handler::pdf_response;

/// Personal statistics for an employee's landing page
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDashboardResponse {
    /// Lifetime hours worked
    #[schema(example = 320.0)]
    pub total_hours: f64,
    /// Lifetime earnings
    #[schema(example = 4800.0)]
    pub total_earnings: f64,
    /// Earnings since the first of the current month
    #[schema(example = 640.0)]
    pub month_earnings: f64,
    /// Current hourly rate
    #[schema(example = 15.0)]
    pub hourly_rate: f64,
    /// Newest own work records
    pub recent_records: Vec<WorkRecordResponse>,
    /// Newest own reports
    pub recent_reports: Vec<ReportResponse>,
}

impl From<EmployeeDashboard> for EmployeeDashboardResponse {
    fn from(dashboard: EmployeeDashboard) -> Self {
        Self {
            total_hours: dashboard.total_hours,
            total_earnings: dashboard.total_earnings,
            month_earnings: dashboard.month_earnings,
            hourly_rate: dashboard.hourly_rate,
            recent_records: dashboard
                .recent_records
                .into_iter()
                .map(Into::into)
                .collect(),
            recent_reports: dashboard
                .recent_reports
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Payload for generating a report over the caller's own records
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateOwnReportRequest {
    /// Range start (inclusive)
    pub start_date: NaiveDate,
    /// Range end (inclusive), must not precede the start
    pub end_date: NaiveDate,
    /// Report kind
    #[schema(example = "work_records")]
    pub report_type: ReportKind,
}

/// Create employee self-service routes
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(employee_dashboard))
        .route("/work-records", get(own_work_records))
        .route("/profile", get(own_profile))
        .route("/reports", get(own_reports).post(generate_own_report))
        .route("/reports/:id/download", get(download_own_report))
}

/// Own totals, current-month earnings, and newest records and reports
#[utoipa::path(
    get,
    path = "/employee/dashboard",
    tag = "Dashboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employee dashboard", body = EmployeeDashboardResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "No employee record linked to this account")
    )
)]
pub async fn employee_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<EmployeeDashboardResponse>> {
    let employee_id = user.employee_scope()?;

    let dashboard = state
        .dashboard_service
        .employee_dashboard(employee_id)
        .await?;

    Ok(Json(dashboard.into()))
}

/// Own work records, newest first
#[utoipa::path(
    get,
    path = "/employee/work-records",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own work records", body = Vec<WorkRecordResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "No employee record linked to this account")
    )
)]
pub async fn own_work_records(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<WorkRecordResponse>>> {
    let employee_id = user.employee_scope()?;

    let records = state
        .work_record_service
        .list_for_employee(employee_id)
        .await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Own employee record joined with the login username
#[utoipa::path(
    get,
    path = "/employee/profile",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own profile", body = EmployeeProfile),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "No employee record linked to this account")
    )
)]
pub async fn own_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<EmployeeProfile>> {
    let employee_id = user.employee_scope()?;

    let profile = state.employee_service.get_profile(employee_id).await?;

    Ok(Json(profile))
}

/// Own newest reports
#[utoipa::path(
    get,
    path = "/employee/reports",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own recent reports", body = Vec<ReportResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "No employee record linked to this account")
    )
)]
pub async fn own_reports(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ReportResponse>>> {
    let employee_id = user.employee_scope()?;

    let reports = state.report_service.list_own(employee_id).await?;

    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

/// Generate and persist a report over the caller's own records
#[utoipa::path(
    post,
    path = "/employee/reports",
    tag = "Reports",
    security(("bearer_auth" = [])),
    request_body = GenerateOwnReportRequest,
    responses(
        (status = 201, description = "Report generated and stored", body = ReportResponse),
        (status = 400, description = "Invalid date range"),
        (status = 403, description = "No employee record linked to this account")
    )
)]
pub async fn generate_own_report(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<GenerateOwnReportRequest>,
) -> AppResult<Created<ReportResponse>> {
    let employee_id = user.employee_scope()?;

    let report = state
        .report_service
        .generate_personal(
            payload.report_type,
            payload.start_date,
            payload.end_date,
            employee_id,
        )
        .await?;

    Ok(Created(report.into()))
}

/// Download one of the caller's own reports as PDF.
///
/// Reports owned by other employees are indistinguishable from
/// missing ones.
#[utoipa::path(
    get,
    path = "/employee/reports/{id}/download",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "PDF content", content_type = "application/pdf"),
        (status = 403, description = "No employee record linked to this account"),
        (status = 404, description = "Report not found")
    )
)]
pub async fn download_own_report(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let employee_id = user.employee_scope()?;

    let document = state.report_service.download_owned(id, employee_id).await?;

    Ok(pdf_response(document))
}
