//! Service Container - Centralized service access with parallel execution support.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::future::Future;
use std::sync::Arc;

use super::{AuthService, DashboardService, EmployeeService, ReportService, WorkRecordService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get work record service
    fn work_records(&self) -> Arc<dyn WorkRecordService>;

    /// Get report service
    fn reports(&self) -> Arc<dyn ReportService>;

    /// Get dashboard service
    fn dashboards(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    employee_service: Arc<dyn EmployeeService>,
    work_record_service: Arc<dyn WorkRecordService>,
    report_service: Arc<dyn ReportService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        work_record_service: Arc<dyn WorkRecordService>,
        report_service: Arc<dyn ReportService>,
        dashboard_service: Arc<dyn DashboardService>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            work_record_service,
            report_service,
            dashboard_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            Authenticator, DashboardAggregator, EmployeeManager, ReportGenerator,
            WorkRecordManager,
        };

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let employee_service = Arc::new(EmployeeManager::new(uow.clone()));
        let work_record_service = Arc::new(WorkRecordManager::new(uow.clone()));
        let report_service = Arc::new(ReportGenerator::new(uow.clone()));
        let dashboard_service = Arc::new(DashboardAggregator::new(uow));

        Self {
            auth_service,
            employee_service,
            work_record_service,
            report_service,
            dashboard_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn work_records(&self) -> Arc<dyn WorkRecordService> {
        self.work_record_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }

    fn dashboards(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
///
/// These functions leverage tokio's async runtime to execute multiple
/// independent operations in parallel, improving throughput.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently and the function returns when both complete.
    /// If either operation fails, the error is returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute four independent async operations in parallel.
    pub async fn join4<F1, F2, F3, F4, T1, T2, T3, T4>(
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
    ) -> AppResult<(T1, T2, T3, T4)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
        F4: Future<Output = AppResult<T4>>,
    {
        try_join!(f1, f2, f3, f4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join_fails_fast() {
        use crate::errors::AppError;

        async fn ok_op() -> AppResult<i32> {
            Ok(7)
        }
        async fn err_op() -> AppResult<i32> {
            Err(AppError::validation("nope"))
        }

        let result = parallel::join3(ok_op(), err_op(), ok_op()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
