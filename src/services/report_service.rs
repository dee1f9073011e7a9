//! Report service - Generates, lists, and serves stored PDF reports.
//!
//! SOLID (SRP): Handles report use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.
//!
//! A report moves through requested (parameters validated), generated
//! (bytes rendered in memory), and stored (row persisted with its
//! content). Only the stored state is durable; downloads replay the
//! stored bytes without further state changes.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::RECENT_LIMIT;
use crate::domain::{NewReport, ReportDocument, ReportKind, ReportRow};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::pdf::{render_company_report, render_personal_report};

/// Report service trait for dependency injection.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Generate and persist a company-wide report, optionally scoped
    /// to one employee. Tables carry an employee column.
    async fn generate(
        &self,
        kind: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> AppResult<ReportRow>;

    /// Generate and persist a report over one employee's own records.
    /// Tables omit the employee column and carry a heading line instead.
    async fn generate_personal(
        &self,
        kind: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Uuid,
    ) -> AppResult<ReportRow>;

    /// List the newest reports
    async fn list_recent(&self) -> AppResult<Vec<ReportRow>>;

    /// List the newest reports belonging to one employee
    async fn list_own(&self, employee_id: Uuid) -> AppResult<Vec<ReportRow>>;

    /// Fetch a stored report with its content
    async fn download(&self, id: Uuid) -> AppResult<ReportDocument>;

    /// Fetch a stored report owned by the given employee. Reports
    /// owned by anyone else are indistinguishable from missing ones.
    async fn download_owned(&self, id: Uuid, employee_id: Uuid) -> AppResult<ReportDocument>;
}

/// Concrete implementation of ReportService using Unit of Work.
pub struct ReportGenerator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReportGenerator<U> {
    /// Create new report service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
        if end_date < start_date {
            return Err(AppError::validation("End date must be after start date"));
        }
        Ok(())
    }

    async fn store(
        &self,
        kind: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Option<Uuid>,
        employee_name: Option<String>,
        content: Vec<u8>,
    ) -> AppResult<ReportRow> {
        let report = self
            .uow
            .reports()
            .insert(NewReport {
                employee_id,
                kind,
                start_date,
                end_date,
                content,
            })
            .await?;

        tracing::info!(report_id = %report.id, kind = %kind, "Generated report");

        Ok(report.into_row(employee_name))
    }
}

#[async_trait]
impl<U: UnitOfWork> ReportService for ReportGenerator<U> {
    async fn generate(
        &self,
        kind: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> AppResult<ReportRow> {
        Self::validate_range(start_date, end_date)?;

        let employee_name = match employee_id {
            Some(id) => {
                let employee = self
                    .uow
                    .employees()
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::NotFound)?;
                Some(employee.name)
            }
            None => None,
        };

        let rows = self
            .uow
            .work_records()
            .find_range(start_date, end_date, employee_id)
            .await?;

        let content = render_company_report(kind, &rows, start_date, end_date);

        self.store(kind, start_date, end_date, employee_id, employee_name, content)
            .await
    }

    async fn generate_personal(
        &self,
        kind: ReportKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Uuid,
    ) -> AppResult<ReportRow> {
        Self::validate_range(start_date, end_date)?;

        let employee = self
            .uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let rows = self
            .uow
            .work_records()
            .find_range(start_date, end_date, Some(employee_id))
            .await?;

        let content = render_personal_report(kind, &rows, start_date, end_date);

        self.store(
            kind,
            start_date,
            end_date,
            Some(employee_id),
            Some(employee.name),
            content,
        )
        .await
    }

    async fn list_recent(&self) -> AppResult<Vec<ReportRow>> {
        self.uow.reports().list_recent(RECENT_LIMIT).await
    }

    async fn list_own(&self, employee_id: Uuid) -> AppResult<Vec<ReportRow>> {
        self.uow
            .reports()
            .list_for_employee(employee_id, RECENT_LIMIT)
            .await
    }

    async fn download(&self, id: Uuid) -> AppResult<ReportDocument> {
        self.uow
            .reports()
            .find_document(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn download_owned(&self, id: Uuid, employee_id: Uuid) -> AppResult<ReportDocument> {
        let document = self.download(id).await?;

        if document.meta.employee_id != Some(employee_id) {
            return Err(AppError::NotFound);
        }

        Ok(document)
    }
}
