//! Report service unit tests.
//!
//! The report lifecycle here runs against mocked repositories: rows in,
//! PDF bytes out, one insert into the report store. Validation failures
//! must never reach the store.

mod common;

use chrono::{NaiveDate, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use payroll_tracker::domain::{
    Employee, Report, ReportDocument, ReportKind, WorkRecordRow,
};
use payroll_tracker::errors::AppError;
use payroll_tracker::infra::{
    MockEmployeeRepository, MockReportRepository, MockWorkRecordRepository,
};
use payroll_tracker::services::{ReportGenerator, ReportService};

use common::TestUnitOfWork;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn row(employee_id: Uuid, name: &str, d: u32, hours: f64, rate: f64) -> WorkRecordRow {
    WorkRecordRow {
        id: Uuid::new_v4(),
        employee_id,
        employee_name: name.to_string(),
        date: date(d),
        hours_worked: hours,
        amount_earned: hours * rate,
        hourly_rate: rate,
    }
}

fn test_employee(id: Uuid, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        hourly_rate: 15.0,
        user_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Report store that answers inserts the way the real one does.
fn storing_reports() -> MockReportRepository {
    let mut reports = MockReportRepository::new();
    reports.expect_insert().returning(|data| {
        assert!(data.content.starts_with(b"%PDF-"), "stored bytes must be a PDF");
        Ok(Report {
            id: Uuid::new_v4(),
            employee_id: data.employee_id,
            kind: data.kind,
            start_date: data.start_date,
            end_date: data.end_date,
            date_created: Utc::now(),
        })
    });
    reports
}

fn service(uow: TestUnitOfWork) -> ReportGenerator<TestUnitOfWork> {
    ReportGenerator::new(std::sync::Arc::new(uow))
}

#[tokio::test]
async fn test_inverted_range_is_rejected_before_any_io() {
    // No expectations are set: touching any repository would panic
    let service = service(TestUnitOfWork::new());

    let result = service
        .generate(ReportKind::Earnings, date(20), date(10), None)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_generate_for_all_employees_stores_pdf() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let mut work_records = MockWorkRecordRepository::new();
    work_records
        .expect_find_range()
        .with(eq(date(1)), eq(date(31)), eq(None))
        .returning(move |_, _, _| {
            Ok(vec![
                row(alice, "Alice", 18, 8.0, 15.0),
                row(bob, "Bob", 16, 6.0, 12.0),
            ])
        });

    let service = service(
        TestUnitOfWork::new()
            .with_work_records(work_records)
            .with_reports(storing_reports()),
    );

    let report = service
        .generate(ReportKind::WorkRecords, date(1), date(31), None)
        .await
        .unwrap();
    assert_eq!(report.employee_id, None);
    assert_eq!(report.employee_name, None);
    assert_eq!(report.kind, ReportKind::WorkRecords);
}

#[tokio::test]
async fn test_generate_scoped_to_one_employee_names_them() {
    let alice = Uuid::new_v4();

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(alice))
        .returning(|id| Ok(Some(test_employee(id, "Alice"))));

    let mut work_records = MockWorkRecordRepository::new();
    work_records
        .expect_find_range()
        .returning(move |_, _, _| Ok(vec![row(alice, "Alice", 18, 8.0, 15.0)]));

    let service = service(
        TestUnitOfWork::new()
            .with_employees(employees)
            .with_work_records(work_records)
            .with_reports(storing_reports()),
    );

    let report = service
        .generate(ReportKind::Detailed, date(1), date(31), Some(alice))
        .await
        .unwrap();
    assert_eq!(report.employee_id, Some(alice));
    assert_eq!(report.employee_name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_generate_for_missing_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let result = service
        .generate(ReportKind::Earnings, date(1), date(31), Some(Uuid::new_v4()))
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_empty_range_still_stores_a_document() {
    let mut work_records = MockWorkRecordRepository::new();
    work_records
        .expect_find_range()
        .returning(|_, _, _| Ok(Vec::new()));

    let service = service(
        TestUnitOfWork::new()
            .with_work_records(work_records)
            .with_reports(storing_reports()),
    );

    // Zero matching records is a header-only document, not an error
    let report = service
        .generate(ReportKind::Earnings, date(1), date(31), None)
        .await
        .unwrap();
    assert_eq!(report.kind, ReportKind::Earnings);
}

#[tokio::test]
async fn test_personal_generation_requires_the_employee() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let result = service
        .generate_personal(ReportKind::WorkRecords, date(1), date(31), Uuid::new_v4())
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_download_owned_hides_other_employees_reports() {
    let report_id = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    let mut reports = MockReportRepository::new();
    reports
        .expect_find_document()
        .with(eq(report_id))
        .returning(move |id| {
            Ok(Some(ReportDocument {
                meta: Report {
                    id,
                    employee_id: Some(owner),
                    kind: ReportKind::WorkRecords,
                    start_date: date(1),
                    end_date: date(31),
                    date_created: Utc::now(),
                },
                content: b"%PDF-1.7".to_vec(),
            }))
        });

    let service = service(TestUnitOfWork::new().with_reports(reports));

    let result = service.download_owned(report_id, other).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let document = service.download_owned(report_id, owner).await.unwrap();
    assert_eq!(document.meta.id, report_id);
}
