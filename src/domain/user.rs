//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_EMPLOYEE};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Employee,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Employee => write!(f, "{}", ROLE_EMPLOYEE),
        }
    }
}

/// User domain entity: a login credential, optionally linked to an
/// employee record. At most one user per employee; admin users carry
/// no employee link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    /// Linked employee (None for admin accounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// New user data for insertion (id and timestamps assigned by the store)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub employee_id: Option<Uuid>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Login username
    #[schema(example = "alice")]
    pub username: String,
    /// User role
    #[schema(example = "employee")]
    pub role: String,
    /// Linked employee identifier, if any
    pub employee_id: Option<Uuid>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
            employee_id: user.employee_id,
            created_at: user.created_at,
        }
    }
}
