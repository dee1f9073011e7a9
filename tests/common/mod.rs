//! Shared test fixtures: a UnitOfWork over mock repositories.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;

use payroll_tracker::errors::{AppError, AppResult};
use payroll_tracker::infra::{
    EmployeeRepository, MockEmployeeRepository, MockReportRepository, MockUserRepository,
    MockWorkRecordRepository, ReportRepository, TransactionContext, UnitOfWork, UserRepository,
    WorkRecordRepository,
};

/// UnitOfWork over mockall repositories.
///
/// Repositories not overridden stay as fresh mocks that panic on any
/// call, so a test only wires up what its code path touches. The
/// `transaction` combinator needs a live database connection and is
/// exercised by the Postgres-gated integration tests instead.
pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    employees: Arc<MockEmployeeRepository>,
    work_records: Arc<MockWorkRecordRepository>,
    reports: Arc<MockReportRepository>,
}

impl TestUnitOfWork {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            employees: Arc::new(MockEmployeeRepository::new()),
            work_records: Arc::new(MockWorkRecordRepository::new()),
            reports: Arc::new(MockReportRepository::new()),
        }
    }

    pub fn with_users(mut self, users: MockUserRepository) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub fn with_employees(mut self, employees: MockEmployeeRepository) -> Self {
        self.employees = Arc::new(employees);
        self
    }

    pub fn with_work_records(mut self, work_records: MockWorkRecordRepository) -> Self {
        self.work_records = Arc::new(work_records);
        self
    }

    pub fn with_reports(mut self, reports: MockReportRepository) -> Self {
        self.reports = Arc::new(reports);
        self
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }

    fn work_records(&self) -> Arc<dyn WorkRecordRepository> {
        self.work_records.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.reports.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal(
            "Transactions not supported in test mock",
        ))
    }
}
