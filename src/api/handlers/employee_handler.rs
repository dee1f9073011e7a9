//! Admin employee management handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::EmployeeResponse;
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Employee create/update payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    /// Employee display name; the lower-cased name becomes the login
    /// username on creation
    #[validate(length(min = 2, max = 64, message = "Name must be 2-64 characters"))]
    #[schema(example = "Alice Johnson")]
    pub name: String,
    /// Hourly rate in currency units, must be positive
    #[validate(range(min = 0.01, message = "Hourly rate must be greater than 0"))]
    #[schema(example = 15.0)]
    pub hourly_rate: f64,
}

/// Response returned after provisioning an employee account
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ProvisionedEmployeeResponse {
    /// The new employee record
    pub employee: EmployeeResponse,
    /// Login username derived from the name
    #[schema(example = "alice johnson")]
    pub username: String,
}

/// Create admin employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees ordered by name
#[utoipa::path(
    get,
    path = "/admin/employees",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    require_admin(&user)?;

    let employees = state.employee_service.list_employees().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Provision an employee with a linked login account
#[utoipa::path(
    post,
    path = "/admin/employees",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee provisioned", body = ProvisionedEmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Created<ProvisionedEmployeeResponse>> {
    require_admin(&user)?;

    let provisioned = state
        .employee_service
        .provision_employee(payload.name, payload.hourly_rate)
        .await?;

    Ok(Created(ProvisionedEmployeeResponse {
        employee: provisioned.employee.into(),
        username: provisioned.user.username,
    }))
}

/// Get one employee
#[utoipa::path(
    get,
    path = "/admin/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployeeResponse>> {
    require_admin(&user)?;

    let employee = state.employee_service.get_employee(id).await?;

    Ok(Json(employee.into()))
}

/// Update an employee's name and hourly rate.
///
/// Stored amounts of existing work records keep the rate they were
/// entered under; only new entries and edits use the updated rate.
#[utoipa::path(
    put,
    path = "/admin/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    require_admin(&user)?;

    let employee = state
        .employee_service
        .update_employee(id, payload.name, payload.hourly_rate)
        .await?;

    Ok(Json(employee.into()))
}

/// Delete an employee, its login account, and its work records
#[utoipa::path(
    delete,
    path = "/admin/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Employee is linked to an admin account"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&user)?;

    state.employee_service.delete_employee(id).await?;

    Ok(NoContent)
}
