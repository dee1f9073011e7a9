//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Employee domain entity: a payroll subject with an hourly rate,
/// linked to at most one login credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub hourly_rate: f64,
    /// Linked login account (None once the account has been removed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New employee data for insertion (id and timestamps assigned by the store)
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub hourly_rate: f64,
    pub user_id: Option<Uuid>,
}

/// Employee response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    /// Unique employee identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Employee display name
    #[schema(example = "Alice Johnson")]
    pub name: String,
    /// Hourly rate in currency units
    #[schema(example = 15.0)]
    pub hourly_rate: f64,
    /// Linked login account, if any
    pub user_id: Option<Uuid>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            hourly_rate: employee.hourly_rate,
            user_id: employee.user_id,
            created_at: employee.created_at,
        }
    }
}

/// Employee profile: the employee row joined with its login username.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeProfile {
    pub id: Uuid,
    /// Employee display name
    #[schema(example = "Alice Johnson")]
    pub name: String,
    /// Hourly rate in currency units
    #[schema(example = 15.0)]
    pub hourly_rate: f64,
    /// Login username; null when the account has been removed
    #[schema(example = "alice johnson")]
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}
