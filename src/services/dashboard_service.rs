//! Dashboard service - Aggregate statistics for the landing pages.
//!
//! SOLID (SRP): Read-only aggregation, no mutations.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::parallel;
use crate::config::RECENT_LIMIT;
use crate::domain::{Employee, ReportRow, WorkRecordRow};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Aggregate view backing the admin landing page.
#[derive(Debug)]
pub struct AdminDashboard {
    pub employee_count: u64,
    pub record_count: u64,
    pub today_records: u64,
    pub total_payments: f64,
    pub recent_records: Vec<WorkRecordRow>,
    pub employees: Vec<Employee>,
}

/// Aggregate view backing an employee's landing page.
#[derive(Debug)]
pub struct EmployeeDashboard {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub month_earnings: f64,
    pub hourly_rate: f64,
    pub recent_records: Vec<WorkRecordRow>,
    pub recent_reports: Vec<ReportRow>,
}

/// Dashboard service trait for dependency injection.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Company-wide counters plus the newest records and all employees
    async fn admin_dashboard(&self) -> AppResult<AdminDashboard>;

    /// One employee's totals, current-month earnings, and newest
    /// records and reports
    async fn employee_dashboard(&self, employee_id: Uuid) -> AppResult<EmployeeDashboard>;
}

/// Concrete implementation of DashboardService using Unit of Work.
pub struct DashboardAggregator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DashboardAggregator<U> {
    /// Create new dashboard service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardAggregator<U> {
    async fn admin_dashboard(&self) -> AppResult<AdminDashboard> {
        let today = Utc::now().date_naive();

        // The counters and listings are independent reads
        let (employee_count, record_count, today_records, totals) = parallel::join4(
            async { self.uow.employees().count().await },
            async { self.uow.work_records().count().await },
            async { self.uow.work_records().count_on(today).await },
            async { self.uow.work_records().totals(None).await },
        )
        .await?;

        let (recent_records, employees) = parallel::join2(
            async { self.uow.work_records().list_rows(Some(RECENT_LIMIT)).await },
            async { self.uow.employees().list().await },
        )
        .await?;

        Ok(AdminDashboard {
            employee_count,
            record_count,
            today_records,
            total_payments: totals.total_earnings,
            recent_records,
            employees,
        })
    }

    async fn employee_dashboard(&self, employee_id: Uuid) -> AppResult<EmployeeDashboard> {
        let employee = self
            .uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let today = Utc::now().date_naive();
        let first_of_month = today.with_day(1).unwrap_or(today);

        let (totals, month_earnings, recent_records, recent_reports) = parallel::join4(
            async { self.uow.work_records().totals(Some(employee_id)).await },
            async {
                self.uow
                    .work_records()
                    .amount_since(employee_id, first_of_month)
                    .await
            },
            async {
                self.uow
                    .work_records()
                    .list_rows_for_employee(employee_id, Some(RECENT_LIMIT))
                    .await
            },
            async {
                self.uow
                    .reports()
                    .list_for_employee(employee_id, RECENT_LIMIT)
                    .await
            },
        )
        .await?;

        Ok(EmployeeDashboard {
            total_hours: totals.total_hours,
            total_earnings: totals.total_earnings,
            month_earnings,
            hourly_rate: employee.hourly_rate,
            recent_records,
            recent_reports,
        })
    }
}
