//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, dashboard_handler, employee_handler, portal_handler, report_handler,
    work_record_handler,
};
use crate::domain::{
    EmployeeProfile, EmployeeResponse, ReportKind, ReportResponse, UserResponse, UserRole,
    WorkRecordResponse,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Payroll Tracker API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Tracker API",
        version = "0.1.0",
        description = "Payroll tracking: employees, hourly work records, and PDF reports",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        auth_handler::me,
        auth_handler::change_password,
        // Admin endpoints
        dashboard_handler::admin_dashboard,
        employee_handler::list_employees,
        employee_handler::create_employee,
        employee_handler::get_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        work_record_handler::list_records,
        work_record_handler::create_record,
        work_record_handler::get_record,
        work_record_handler::update_record,
        work_record_handler::delete_record,
        report_handler::list_reports,
        report_handler::generate_report,
        report_handler::download_report,
        // Employee self-service endpoints
        portal_handler::employee_dashboard,
        portal_handler::own_work_records,
        portal_handler::own_profile,
        portal_handler::own_reports,
        portal_handler::generate_own_report,
        portal_handler::download_own_report,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            EmployeeResponse,
            EmployeeProfile,
            WorkRecordResponse,
            ReportKind,
            ReportResponse,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::ChangePasswordRequest,
            TokenResponse,
            MessageResponse,
            // Admin request/response types
            dashboard_handler::AdminDashboardResponse,
            employee_handler::EmployeeRequest,
            employee_handler::ProvisionedEmployeeResponse,
            work_record_handler::CreateWorkRecordRequest,
            work_record_handler::UpdateWorkRecordRequest,
            report_handler::GenerateReportRequest,
            // Employee self-service types
            portal_handler::EmployeeDashboardResponse,
            portal_handler::GenerateOwnReportRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and credential management"),
        (name = "Dashboards", description = "Aggregate statistics"),
        (name = "Employees", description = "Employee management and profiles"),
        (name = "Work Records", description = "Logged hours and derived pay"),
        (name = "Reports", description = "Generated PDF reports")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
