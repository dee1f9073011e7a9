//! Employee service unit tests.
//!
//! Covers validation and the non-transactional paths with mocked
//! repositories. Transactional provisioning and cascade deletion run
//! against a real database in the Postgres-gated integration tests.

mod common;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use payroll_tracker::domain::{Employee, User, UserRole};
use payroll_tracker::errors::AppError;
use payroll_tracker::infra::{MockEmployeeRepository, MockUserRepository};
use payroll_tracker::services::{EmployeeManager, EmployeeService};

use common::TestUnitOfWork;

fn test_employee(id: Uuid, name: &str, user_id: Option<Uuid>) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        hourly_rate: 15.0,
        user_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_user(id: Uuid, username: &str, role: UserRole) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: "hashed".to_string(),
        role,
        employee_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(uow: TestUnitOfWork) -> EmployeeManager<TestUnitOfWork> {
    EmployeeManager::new(std::sync::Arc::new(uow))
}

#[tokio::test]
async fn test_get_employee_found() {
    let id = Uuid::new_v4();

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |id| Ok(Some(test_employee(id, "Alice", None))));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let employee = service.get_employee(id).await.unwrap();
    assert_eq!(employee.name, "Alice");
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let result = service.get_employee(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_provision_rejects_empty_name() {
    let service = service(TestUnitOfWork::new());

    let result = service.provision_employee("   ".to_string(), 15.0).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_provision_rejects_non_positive_rate() {
    let service = service(TestUnitOfWork::new());

    let result = service.provision_employee("Alice".to_string(), 0.0).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service.provision_employee("Alice".to_string(), -5.0).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_provision_duplicate_username_conflicts() {
    // The username is the lower-cased name
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .with(eq("alice"))
        .returning(|name| Ok(Some(test_user(Uuid::new_v4(), name, UserRole::Employee))));

    let service = service(TestUnitOfWork::new().with_users(users));
    let result = service.provision_employee("Alice".to_string(), 15.0).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_update_employee_rejects_bad_input() {
    let service = service(TestUnitOfWork::new());

    let result = service
        .update_employee(Uuid::new_v4(), "".to_string(), 15.0)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service
        .update_employee(Uuid::new_v4(), "Alice".to_string(), -1.0)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_delete_employee_linked_to_admin_is_refused() {
    let employee_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(employee_id))
        .returning(move |id| Ok(Some(test_employee(id, "Boss", Some(user_id)))));

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id, "boss", UserRole::Admin))));

    let service = service(
        TestUnitOfWork::new()
            .with_employees(employees)
            .with_users(users),
    );
    let result = service.delete_employee(employee_id).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_delete_missing_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let service = service(TestUnitOfWork::new().with_employees(employees));
    let result = service.delete_employee(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_profile_joins_username() {
    let employee_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .with(eq(employee_id))
        .returning(move |id| Ok(Some(test_employee(id, "Alice", Some(user_id)))));

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id, "alice", UserRole::Employee))));

    let service = service(
        TestUnitOfWork::new()
            .with_employees(employees)
            .with_users(users),
    );
    let profile = service.get_profile(employee_id).await.unwrap();
    assert_eq!(profile.name, "Alice");
    assert_eq!(profile.username.as_deref(), Some("alice"));
    assert_eq!(profile.hourly_rate, 15.0);
}
