//! Admin report handlers: list, generate, download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{ReportDocument, ReportKind, ReportResponse};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// Report generation payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateReportRequest {
    /// An employee ID, or "all" for a company-wide report
    #[validate(length(min = 1, message = "Employee selection is required"))]
    #[schema(example = "all")]
    pub employee_id: String,
    /// Range start (inclusive)
    pub start_date: NaiveDate,
    /// Range end (inclusive), must not precede the start
    pub end_date: NaiveDate,
    /// Report kind
    #[schema(example = "earnings")]
    pub report_type: ReportKind,
}

impl GenerateReportRequest {
    /// Parse the employee selection: "all" spans every employee.
    fn employee_scope(&self) -> AppResult<Option<Uuid>> {
        if self.employee_id == "all" {
            return Ok(None);
        }

        Uuid::parse_str(&self.employee_id)
            .map(Some)
            .map_err(|_| AppError::BadRequest("Invalid employee ID".to_string()))
    }
}

/// Create admin report routes
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(generate_report))
        .route("/:id/download", get(download_report))
}

/// Build the PDF download response for a stored report.
pub(crate) fn pdf_response(document: ReportDocument) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", document.meta.download_filename()),
        ),
    ];

    (headers, document.content).into_response()
}

/// List the newest reports
#[utoipa::path(
    get,
    path = "/admin/reports",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Recent reports, newest first", body = Vec<ReportResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ReportResponse>>> {
    require_admin(&user)?;

    let reports = state.report_service.list_recent().await?;

    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

/// Generate and persist a report over a date range
#[utoipa::path(
    post,
    path = "/admin/reports",
    tag = "Reports",
    security(("bearer_auth" = [])),
    request_body = GenerateReportRequest,
    responses(
        (status = 201, description = "Report generated and stored", body = ReportResponse),
        (status = 400, description = "Invalid date range"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<GenerateReportRequest>,
) -> AppResult<Created<ReportResponse>> {
    require_admin(&user)?;

    let employee_id = payload.employee_scope()?;

    let report = state
        .report_service
        .generate(
            payload.report_type,
            payload.start_date,
            payload.end_date,
            employee_id,
        )
        .await?;

    Ok(Created(report.into()))
}

/// Download a stored report as PDF
#[utoipa::path(
    get,
    path = "/admin/reports/{id}/download",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "PDF content", content_type = "application/pdf"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Report not found")
    )
)]
pub async fn download_report(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    require_admin(&user)?;

    let document = state.report_service.download(id).await?;

    Ok(pdf_response(document))
}
