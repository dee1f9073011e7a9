//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, ROLE_ADMIN};
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub employee_id: Option<Uuid>,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Employee record this account belongs to.
    ///
    /// Admin accounts (and accounts whose employee was removed) have no
    /// employee record, so employee-scoped endpoints reject them.
    pub fn employee_scope(&self) -> Result<Uuid, AppError> {
        self.employee_id.ok_or(AppError::Forbidden)
    }
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let current_user = CurrentUser {
        id: claims.sub,
        username: claims.username,
        role: claims.role,
        employee_id: claims.employee_id,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require admin role, returns Forbidden error if not admin.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
