//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    dashboard_routes, employee_routes, portal_routes, protected_auth_routes, public_auth_routes,
    report_routes, work_record_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Everything under /auth (except login), /admin, and /employee sits
    // behind the JWT middleware; admin handlers check the role claim.
    let auth = public_auth_routes().merge(protected_auth_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth_middleware),
    ));

    let admin = Router::new()
        .nest("/dashboard", dashboard_routes())
        .nest("/employees", employee_routes())
        .nest("/work-records", work_record_routes())
        .nest("/reports", report_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let employee = portal_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", auth)
        .nest("/admin", admin)
        .nest("/employee", employee)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Payroll Tracker API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: DatabaseStatus,
}

/// Database connectivity status
#[derive(Serialize)]
struct DatabaseStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, database) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            DatabaseStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            DatabaseStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        ),
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK {
            "healthy"
        } else {
            "degraded"
        },
        database,
    };

    (status_code, Json(response))
}
