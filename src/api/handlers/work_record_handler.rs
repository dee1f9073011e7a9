//! Admin work record handlers.

use axum::{
    extract::{Path, State},
    response::Json,
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
use crate::domain::{WorkRecord, WorkRecordResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// New work record payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkRecordRequest {
    /// Employee the record belongs to
    pub employee_id: Uuid,
    /// Work date
    pub date: NaiveDate,
    /// Hours worked that day (0-24)
    #[validate(range(min = 0.0, max = 24.0, message = "Hours must be between 0 and 24"))]
    #[schema(example = 8.0)]
    pub hours_worked: f64,
}

/// Work record edit payload.
///
/// Edits recompute the stored amount from the employee's current
/// hourly rate, not the rate at original entry.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkRecordRequest {
    /// Work date
    pub date: NaiveDate,
    /// Hours worked that day, must be positive on edit
    #[validate(range(min = 0.01, max = 24.0, message = "Hours must be between 0 and 24"))]
    #[schema(example = 7.5)]
    pub hours_worked: f64,
}

/// Create admin work record routes
pub fn work_record_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
}

/// List all work records across employees, newest first
#[utoipa::path(
    get,
    path = "/admin/work-records",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All work records", body = Vec<WorkRecordResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<WorkRecordResponse>>> {
    require_admin(&user)?;

    let records = state.work_record_service.list_records().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Log hours for one day.
///
/// The stored amount is hours times the employee's hourly rate at
/// entry time.
#[utoipa::path(
    post,
    path = "/admin/work-records",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    request_body = CreateWorkRecordRequest,
    responses(
        (status = 201, description = "Work record created"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateWorkRecordRequest>,
) -> AppResult<Created<WorkRecord>> {
    require_admin(&user)?;

    let record = state
        .work_record_service
        .create_record(payload.employee_id, payload.date, payload.hours_worked)
        .await?;

    Ok(Created(record))
}

/// Get one work record
#[utoipa::path(
    get,
    path = "/admin/work-records/{id}",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Work record ID")),
    responses(
        (status = 200, description = "Work record found"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Work record not found")
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WorkRecord>> {
    require_admin(&user)?;

    let record = state.work_record_service.get_record(id).await?;

    Ok(Json(record))
}

/// Edit a work record's date and hours
#[utoipa::path(
    put,
    path = "/admin/work-records/{id}",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Work record ID")),
    request_body = UpdateWorkRecordRequest,
    responses(
        (status = 200, description = "Work record updated"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Work record not found")
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateWorkRecordRequest>,
) -> AppResult<Json<WorkRecord>> {
    require_admin(&user)?;

    let record = state
        .work_record_service
        .update_record(id, payload.date, payload.hours_worked)
        .await?;

    Ok(Json(record))
}

/// Delete a work record
#[utoipa::path(
    delete,
    path = "/admin/work-records/{id}",
    tag = "Work Records",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Work record ID")),
    responses(
        (status = 204, description = "Work record deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Work record not found")
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&user)?;

    state.work_record_service.delete_record(id).await?;

    Ok(NoContent)
}
