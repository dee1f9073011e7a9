//! Work record service - Handles timesheet business logic.
//!
//! SOLID (SRP): Handles work record use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MAX_HOURS_PER_RECORD;
use crate::domain::{amount_earned, NewWorkRecord, WorkRecord, WorkRecordRow};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Work record service trait for dependency injection.
#[async_trait]
pub trait WorkRecordService: Send + Sync {
    /// List all records across employees, newest first
    async fn list_records(&self) -> AppResult<Vec<WorkRecordRow>>;

    /// List one employee's records, newest first
    async fn list_for_employee(&self, employee_id: Uuid) -> AppResult<Vec<WorkRecordRow>>;

    /// Get work record by ID
    async fn get_record(&self, id: Uuid) -> AppResult<WorkRecord>;

    /// Log hours for one day. The stored amount is hours times the
    /// employee's hourly rate at entry time.
    async fn create_record(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
    ) -> AppResult<WorkRecord>;

    /// Edit a record. The amount is recomputed from the employee's
    /// current hourly rate, not the rate at original entry.
    async fn update_record(
        &self,
        id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
    ) -> AppResult<WorkRecord>;

    /// Delete a work record
    async fn delete_record(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of WorkRecordService using Unit of Work.
pub struct WorkRecordManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> WorkRecordManager<U> {
    /// Create new work record service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn validate_hours(hours_worked: f64) -> AppResult<()> {
    if hours_worked < 0.0 {
        return Err(AppError::validation("Hours worked cannot be negative"));
    }
    if hours_worked > MAX_HOURS_PER_RECORD {
        return Err(AppError::validation(format!(
            "Hours worked cannot exceed {MAX_HOURS_PER_RECORD}"
        )));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> WorkRecordService for WorkRecordManager<U> {
    async fn list_records(&self) -> AppResult<Vec<WorkRecordRow>> {
        self.uow.work_records().list_rows(None).await
    }

    async fn list_for_employee(&self, employee_id: Uuid) -> AppResult<Vec<WorkRecordRow>> {
        self.uow
            .work_records()
            .list_rows_for_employee(employee_id, None)
            .await
    }

    async fn get_record(&self, id: Uuid) -> AppResult<WorkRecord> {
        self.uow
            .work_records()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_record(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
    ) -> AppResult<WorkRecord> {
        validate_hours(hours_worked)?;

        let employee = self
            .uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let amount = amount_earned(hours_worked, employee.hourly_rate);

        self.uow
            .work_records()
            .create(NewWorkRecord {
                employee_id,
                date,
                hours_worked,
                amount_earned: amount,
            })
            .await
    }

    async fn update_record(
        &self,
        id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
    ) -> AppResult<WorkRecord> {
        if hours_worked <= 0.0 {
            return Err(AppError::validation("Hours worked must be greater than 0"));
        }
        validate_hours(hours_worked)?;

        let record = self
            .uow
            .work_records()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let employee = self
            .uow
            .employees()
            .find_by_id(record.employee_id)
            .await?
            .ok_or(AppError::NotFound)?;

        // Recompute from the current rate; a rate change after entry
        // alters the stored amount of edited records.
        let amount = amount_earned(hours_worked, employee.hourly_rate);

        self.uow
            .work_records()
            .update(id, date, hours_worked, amount)
            .await
    }

    async fn delete_record(&self, id: Uuid) -> AppResult<()> {
        self.uow.work_records().delete(id).await
    }
}
