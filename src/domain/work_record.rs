//! Work record domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Work record domain entity: one day's logged hours and derived pay
/// for one employee. `amount_earned` is fixed at entry time from the
/// employee's then-current hourly rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub amount_earned: f64,
}

/// New work record data for insertion (id assigned by the store)
#[derive(Debug, Clone)]
pub struct NewWorkRecord {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub amount_earned: f64,
}

/// A work record joined with its employee's name and current hourly
/// rate. This is the row shape consumed by listings and by the report
/// generator (the `detailed` report needs the rate column).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRecordRow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub amount_earned: f64,
    pub hourly_rate: f64,
}

/// Work record response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkRecordResponse {
    /// Unique record identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Owning employee identifier
    pub employee_id: Uuid,
    /// Employee display name
    #[schema(example = "Alice Johnson")]
    pub employee_name: String,
    /// Work date
    pub date: NaiveDate,
    /// Hours worked on that date (0-24)
    #[schema(example = 8.0)]
    pub hours_worked: f64,
    /// Pay derived at entry time
    #[schema(example = 120.0)]
    pub amount_earned: f64,
}

impl From<WorkRecordRow> for WorkRecordResponse {
    fn from(row: WorkRecordRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            date: row.date,
            hours_worked: row.hours_worked,
            amount_earned: row.amount_earned,
        }
    }
}
