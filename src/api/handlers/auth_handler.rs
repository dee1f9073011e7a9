//! Authentication handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Login username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice johnson")]
    pub username: String,
    /// User password
    #[schema(example = "password123")]
    pub password: String,
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password, re-verified before the change is applied
    #[schema(example = "password123")]
    pub current_password: String,
    /// New password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "s3cret-pass", min_length = 6)]
    pub new_password: String,
    /// Repeat of the new password
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    #[schema(example = "s3cret-pass")]
    pub confirm_password: String,
}

/// Create authentication routes that need no token
pub fn public_auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Create authentication routes behind the auth middleware
pub fn protected_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/change-password", post(change_password))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(token))
}

/// Get the authenticated user's account
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let account = state.auth_service.get_user(user.id).await?;

    Ok(Json(UserResponse::from(account)))
}

/// Change the authenticated user's password
#[utoipa::path(
    post,
    path = "/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Current password is incorrect")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .change_password(user.id, payload.current_password, payload.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
