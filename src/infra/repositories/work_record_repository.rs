//! Work record repository.
//!
//! Listings are served by raw joined queries so each row carries the
//! employee name and current hourly rate alongside the record itself.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, Set, Statement, Value,
};
use uuid::Uuid;

use super::entities::work_record::{self, ActiveModel, Entity as WorkRecordEntity};
use crate::domain::{NewWorkRecord, WorkRecord, WorkRecordRow};
use crate::errors::{AppError, AppResult};

const ROW_SELECT: &str = "SELECT wr.id, wr.employee_id, e.name AS employee_name, wr.date, \
     wr.hours_worked, wr.amount_earned, e.hourly_rate \
     FROM work_records wr JOIN employees e ON e.id = wr.employee_id";

/// Work record repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait WorkRecordRepository: Send + Sync {
    /// Find work record by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<WorkRecord>>;

    /// List records across all employees, newest first
    async fn list_rows(&self, limit: Option<u64>) -> AppResult<Vec<WorkRecordRow>>;

    /// List one employee's records, newest first
    async fn list_rows_for_employee(
        &self,
        employee_id: Uuid,
        limit: Option<u64>,
    ) -> AppResult<Vec<WorkRecordRow>>;

    /// List records dated within `[start, end]`, ordered by employee
    /// name and then date descending
    async fn find_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<WorkRecordRow>>;

    /// Create a new work record
    async fn create(&self, data: NewWorkRecord) -> AppResult<WorkRecord>;

    /// Update date, hours, and the stored amount
    async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
        amount_earned: f64,
    ) -> AppResult<WorkRecord>;

    /// Delete a work record
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Count all work records
    async fn count(&self) -> AppResult<u64>;

    /// Count records dated exactly `date`
    async fn count_on(&self, date: NaiveDate) -> AppResult<u64>;

    /// Sum hours and amounts, optionally narrowed to one employee
    async fn totals(&self, employee_id: Option<Uuid>) -> AppResult<WorkTotals>;

    /// Sum one employee's amounts for records dated on or after `start`
    async fn amount_since(&self, employee_id: Uuid, start: NaiveDate) -> AppResult<f64>;
}

/// Aggregate sums over a set of work records.
#[derive(Debug, Clone, Copy, PartialEq, FromQueryResult)]
pub struct WorkTotals {
    pub total_hours: f64,
    pub total_earnings: f64,
}

#[derive(Debug, FromQueryResult)]
struct RowModel {
    id: Uuid,
    employee_id: Uuid,
    employee_name: String,
    date: NaiveDate,
    hours_worked: f64,
    amount_earned: f64,
    hourly_rate: f64,
}

impl From<RowModel> for WorkRecordRow {
    fn from(row: RowModel) -> Self {
        WorkRecordRow {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            date: row.date,
            hours_worked: row.hours_worked,
            amount_earned: row.amount_earned,
            hourly_rate: row.hourly_rate,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct SumRow {
    total: f64,
}

/// Concrete implementation of WorkRecordRepository over SeaORM
pub struct WorkRecordStore {
    db: DatabaseConnection,
}

impl WorkRecordStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_rows(&self, sql: String, values: Vec<Value>) -> AppResult<Vec<WorkRecordRow>> {
        let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);
        let rows = RowModel::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(rows.into_iter().map(WorkRecordRow::from).collect())
    }
}

#[async_trait]
impl WorkRecordRepository for WorkRecordStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<WorkRecord>> {
        let result = WorkRecordEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(WorkRecord::from))
    }

    async fn list_rows(&self, limit: Option<u64>) -> AppResult<Vec<WorkRecordRow>> {
        let mut sql = format!("{ROW_SELECT} ORDER BY wr.date DESC, wr.id");
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        self.fetch_rows(sql, Vec::new()).await
    }

    async fn list_rows_for_employee(
        &self,
        employee_id: Uuid,
        limit: Option<u64>,
    ) -> AppResult<Vec<WorkRecordRow>> {
        let mut sql = format!("{ROW_SELECT} WHERE wr.employee_id = $1 ORDER BY wr.date DESC, wr.id");
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        self.fetch_rows(sql, vec![employee_id.into()]).await
    }

    async fn find_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<WorkRecordRow>> {
        let mut sql = format!("{ROW_SELECT} WHERE wr.date BETWEEN $1 AND $2");
        let mut values: Vec<Value> = vec![start.into(), end.into()];
        if let Some(id) = employee_id {
            sql.push_str(" AND wr.employee_id = $3");
            values.push(id.into());
        }
        // Stable tiebreak on id so equal (name, date) pairs cannot
        // reorder between fetches of the same data.
        sql.push_str(" ORDER BY e.name, wr.date DESC, wr.id");
        self.fetch_rows(sql, values).await
    }

    async fn create(&self, data: NewWorkRecord) -> AppResult<WorkRecord> {
        let model = new_work_record_model(data)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(WorkRecord::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        hours_worked: f64,
        amount_earned: f64,
    ) -> AppResult<WorkRecord> {
        let existing = WorkRecordEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.date = Set(date);
        active.hours_worked = Set(hours_worked);
        active.amount_earned = Set(amount_earned);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(WorkRecord::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = WorkRecordEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        WorkRecordEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn count_on(&self, date: NaiveDate) -> AppResult<u64> {
        WorkRecordEntity::find()
            .filter(work_record::Column::Date.eq(date))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn totals(&self, employee_id: Option<Uuid>) -> AppResult<WorkTotals> {
        let mut sql = String::from(
            "SELECT COALESCE(SUM(hours_worked), 0)::double precision AS total_hours, \
             COALESCE(SUM(amount_earned), 0)::double precision AS total_earnings \
             FROM work_records",
        );
        let mut values: Vec<Value> = Vec::new();
        if let Some(id) = employee_id {
            sql.push_str(" WHERE employee_id = $1");
            values.push(id.into());
        }
        let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);
        let totals = WorkTotals::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(totals.unwrap_or(WorkTotals {
            total_hours: 0.0,
            total_earnings: 0.0,
        }))
    }

    async fn amount_since(&self, employee_id: Uuid, start: NaiveDate) -> AppResult<f64> {
        let sql = "SELECT COALESCE(SUM(amount_earned), 0)::double precision AS total \
             FROM work_records WHERE employee_id = $1 AND date >= $2";
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [employee_id.into(), start.into()],
        );
        let row = SumRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(row.map(|r| r.total).unwrap_or(0.0))
    }
}

/// Build an insertable model from new-record data (shared with the
/// transactional store).
pub(crate) fn new_work_record_model(data: NewWorkRecord) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(data.employee_id),
        date: Set(data.date),
        hours_worked: Set(data.hours_worked),
        amount_earned: Set(data.amount_earned),
    }
}
