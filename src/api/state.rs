//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthService, DashboardService, EmployeeService, ReportService, ServiceContainer, Services,
    WorkRecordService,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization with full
/// ServiceContainer and UnitOfWork support.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Employee management service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Work record service
    pub work_record_service: Arc<dyn WorkRecordService>,
    /// Report service
    pub report_service: Arc<dyn ReportService>,
    /// Dashboard service
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Internal service container (optional, only with from_config)
    service_container: Option<Arc<Services>>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Arc::new(Services::from_connection(
            database.get_connection(),
            config,
        ));

        Self {
            auth_service: container.auth(),
            employee_service: container.employees(),
            work_record_service: container.work_records(),
            report_service: container.reports(),
            dashboard_service: container.dashboards(),
            database,
            service_container: Some(container),
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Note: This method does not provide ServiceContainer access.
    /// Use `from_config()` for full functionality.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        work_record_service: Arc<dyn WorkRecordService>,
        report_service: Arc<dyn ReportService>,
        dashboard_service: Arc<dyn DashboardService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            work_record_service,
            report_service,
            dashboard_service,
            database,
            service_container: None,
        }
    }

    /// Get the service container for centralized service access.
    ///
    /// Returns `Some` only if created via `from_config()`.
    pub fn services(&self) -> Option<&Arc<Services>> {
        self.service_container.as_ref()
    }
}
