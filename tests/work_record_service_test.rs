//! Work record service unit tests.

mod common;

use chrono::{NaiveDate, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use payroll_tracker::domain::{Employee, WorkRecord};
use payroll_tracker::errors::AppError;
use payroll_tracker::infra::{MockEmployeeRepository, MockWorkRecordRepository};
use payroll_tracker::services::{WorkRecordManager, WorkRecordService};

use common::TestUnitOfWork;

fn test_employee(id: Uuid, hourly_rate: f64) -> Employee {
    Employee {
        id,
        name: "Alice".to_string(),
        hourly_rate,
        user_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn service(uow: TestUnitOfWork) -> WorkRecordManager<TestUnitOfWork> {
    WorkRecordManager::new(std::sync::Arc::new(uow))
}

#[tokio::test]
async fn test_create_derives_amount_from_current_rate() {
    let employee_id = Uuid::new_v4();

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(employee_id))
        .returning(|id| Ok(Some(test_employee(id, 15.0))));

    let mut work_records = MockWorkRecordRepository::new();
    work_records
        .expect_create()
        .withf(|data| data.hours_worked == 8.0 && data.amount_earned == 120.0)
        .returning(|data| {
            Ok(WorkRecord {
                id: Uuid::new_v4(),
                employee_id: data.employee_id,
                date: data.date,
                hours_worked: data.hours_worked,
                amount_earned: data.amount_earned,
            })
        });

    let service = service(
        TestUnitOfWork::new()
            .with_employees(employees)
            .with_work_records(work_records),
    );

    let record = service
        .create_record(employee_id, date(15), 8.0)
        .await
        .unwrap();
    assert_eq!(record.amount_earned, 120.0);
}

#[tokio::test]
async fn test_create_rejects_out_of_range_hours() {
    let service = service(TestUnitOfWork::new());

    let result = service.create_record(Uuid::new_v4(), date(15), -1.0).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service.create_record(Uuid::new_v4(), date(15), 24.5).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_create_for_missing_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let result = service.create_record(Uuid::new_v4(), date(15), 8.0).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_recomputes_amount_from_current_rate() {
    let record_id = Uuid::new_v4();
    let employee_id = Uuid::new_v4();

    let mut work_records = MockWorkRecordRepository::new();
    work_records
        .expect_find_by_id()
        .with(eq(record_id))
        .returning(move |id| {
            // Stored under the old 15.0 rate
            Ok(Some(WorkRecord {
                id,
                employee_id,
                date: date(10),
                hours_worked: 8.0,
                amount_earned: 120.0,
            }))
        });
    // The rate has been raised to 20.0 since entry, so the edit
    // stores 8 * 20 even though the hours are unchanged.
    work_records
        .expect_update()
        .withf(|_, _, hours, amount| *hours == 8.0 && *amount == 160.0)
        .returning(move |id, date, hours_worked, amount_earned| {
            Ok(WorkRecord {
                id,
                employee_id,
                date,
                hours_worked,
                amount_earned,
            })
        });

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(employee_id))
        .returning(|id| Ok(Some(test_employee(id, 20.0))));

    let service = service(
        TestUnitOfWork::new()
            .with_employees(employees)
            .with_work_records(work_records),
    );

    let record = service.update_record(record_id, date(10), 8.0).await.unwrap();
    assert_eq!(record.amount_earned, 160.0);
}

#[tokio::test]
async fn test_update_rejects_non_positive_hours() {
    let service = service(TestUnitOfWork::new());

    let result = service.update_record(Uuid::new_v4(), date(10), 0.0).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_update_missing_record_not_found() {
    let mut work_records = MockWorkRecordRepository::new();
    work_records.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_work_records(work_records));
    let result = service.update_record(Uuid::new_v4(), date(10), 8.0).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
