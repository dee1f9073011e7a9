//! Report repository.
//!
//! Listing queries select metadata columns only; the stored PDF bytes
//! are fetched just for downloads.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Set,
    Statement, Value,
};
use uuid::Uuid;

use super::entities::report::{self, Entity as ReportEntity};
use crate::domain::{NewReport, Report, ReportDocument, ReportKind, ReportRow};
use crate::errors::{AppError, AppResult};

const META_SELECT: &str = "SELECT r.id, r.employee_id, e.name AS employee_name, r.report_type, \
     r.start_date, r.end_date, r.date_created \
     FROM reports r LEFT JOIN employees e ON e.id = r.employee_id";

/// Report repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a rendered report
    async fn insert(&self, data: NewReport) -> AppResult<Report>;

    /// Fetch a report with its PDF content
    async fn find_document(&self, id: Uuid) -> AppResult<Option<ReportDocument>>;

    /// List the newest reports, metadata only
    async fn list_recent(&self, limit: u64) -> AppResult<Vec<ReportRow>>;

    /// List the newest reports scoped to one employee, metadata only
    async fn list_for_employee(&self, employee_id: Uuid, limit: u64) -> AppResult<Vec<ReportRow>>;
}

#[derive(Debug, FromQueryResult)]
struct MetaRow {
    id: Uuid,
    employee_id: Option<Uuid>,
    employee_name: Option<String>,
    report_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    date_created: chrono::DateTime<chrono::Utc>,
}

impl From<MetaRow> for ReportRow {
    fn from(row: MetaRow) -> Self {
        ReportRow {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            kind: ReportKind::from(row.report_type.as_str()),
            start_date: row.start_date,
            end_date: row.end_date,
            date_created: row.date_created,
        }
    }
}

/// Concrete implementation of ReportRepository over SeaORM
pub struct ReportStore {
    db: DatabaseConnection,
}

impl ReportStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_meta(&self, sql: String, values: Vec<Value>) -> AppResult<Vec<ReportRow>> {
        let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);
        let rows = MetaRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(rows.into_iter().map(ReportRow::from).collect())
    }
}

#[async_trait]
impl ReportRepository for ReportStore {
    async fn insert(&self, data: NewReport) -> AppResult<Report> {
        let model = report::ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(data.employee_id),
            report_type: Set(data.kind.as_str().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            content: Set(data.content),
            date_created: Set(chrono::Utc::now()),
        };

        let model = model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Report::from(model))
    }

    async fn find_document(&self, id: Uuid) -> AppResult<Option<ReportDocument>> {
        let result = ReportEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ReportDocument::from))
    }

    async fn list_recent(&self, limit: u64) -> AppResult<Vec<ReportRow>> {
        let sql = format!("{META_SELECT} ORDER BY r.date_created DESC, r.id LIMIT {limit}");
        self.fetch_meta(sql, Vec::new()).await
    }

    async fn list_for_employee(&self, employee_id: Uuid, limit: u64) -> AppResult<Vec<ReportRow>> {
        let sql = format!(
            "{META_SELECT} WHERE r.employee_id = $1 ORDER BY r.date_created DESC, r.id LIMIT {limit}"
        );
        self.fetch_meta(sql, vec![employee_id.into()]).await
    }
}
