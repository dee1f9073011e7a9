//! Postgres integration tests.
//!
//! These cover the transactional paths the mock-based tests cannot:
//! atomic provisioning, cascade deletion, and report storage. Each
//! test creates a scratch database, runs migrations, and drops it
//! afterwards. Set TEST_DATABASE_URL to a Postgres URL to enable
//! them; without it every test skips.

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{
    ConnectionTrait, Database as SeaDatabase, DatabaseBackend, DatabaseConnection, Statement,
};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use payroll_tracker::config::{Config, DEFAULT_EMPLOYEE_PASSWORD};
use payroll_tracker::domain::{NewUser, ReportKind, UserRole};
use payroll_tracker::errors::{AppError, AppResult};
use payroll_tracker::infra::{Migrator, Persistence, UnitOfWork};
use payroll_tracker::services::{
    AuthService, Authenticator, EmployeeManager, EmployeeService, ReportGenerator, ReportService,
    WorkRecordManager, WorkRecordService,
};

struct PgContext {
    uow: Arc<Persistence>,
    conn: DatabaseConnection,
    admin_url: String,
    db_name: String,
}

impl PgContext {
    /// Create a scratch database and run migrations. Returns None when
    /// TEST_DATABASE_URL is not set or Postgres is unreachable.
    async fn new() -> Option<Self> {
        let base = std::env::var("TEST_DATABASE_URL").ok()?;
        let (admin_url, db_name, test_url) = scratch_urls(&base)?;

        let admin = SeaDatabase::connect(&admin_url).await.ok()?;
        let _ = admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE);"),
            ))
            .await;
        admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("CREATE DATABASE \"{db_name}\";"),
            ))
            .await
            .ok()?;

        let conn = SeaDatabase::connect(&test_url).await.ok()?;
        Migrator::up(&conn, None).await.ok()?;

        Some(Self {
            uow: Arc::new(Persistence::new(conn.clone())),
            conn,
            admin_url,
            db_name,
        })
    }

    fn employees(&self) -> EmployeeManager<Persistence> {
        EmployeeManager::new(self.uow.clone())
    }

    fn work_records(&self) -> WorkRecordManager<Persistence> {
        WorkRecordManager::new(self.uow.clone())
    }

    fn reports(&self) -> ReportGenerator<Persistence> {
        ReportGenerator::new(self.uow.clone())
    }

    async fn cleanup(self) {
        let Self {
            uow,
            conn,
            admin_url,
            db_name,
        } = self;
        drop(uow);
        drop(conn);
        if let Ok(admin) = SeaDatabase::connect(&admin_url).await {
            let _ = admin
                .execute(Statement::from_string(
                    DatabaseBackend::Postgres,
                    format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE);"),
                ))
                .await;
        }
    }
}

/// Derive admin and scratch-database URLs from the configured base URL.
fn scratch_urls(base: &str) -> Option<(String, String, String)> {
    let (prefix, db_path) = base.rsplit_once('/')?;
    if !prefix.contains("://") {
        return None;
    }
    let base_name = if db_path.is_empty() {
        "payroll_test"
    } else {
        db_path
    };
    let db_name = format!("{}_{}", base_name, Uuid::new_v4().simple());
    Some((
        format!("{prefix}/postgres"),
        db_name.clone(),
        format!("{prefix}/{db_name}"),
    ))
}

macro_rules! pg_context {
    () => {
        match PgContext::new().await {
            Some(ctx) => ctx,
            None => {
                eprintln!("skipping Postgres integration test: TEST_DATABASE_URL not set");
                return;
            }
        }
    };
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[tokio::test]
async fn test_provisioning_creates_linked_login_account() {
    let ctx = pg_context!();

    let provisioned = ctx
        .employees()
        .provision_employee("Alice Johnson".to_string(), 15.0)
        .await
        .unwrap();

    assert_eq!(provisioned.user.username, "alice johnson");
    assert_eq!(provisioned.user.role, UserRole::Employee);
    assert_eq!(provisioned.user.employee_id, Some(provisioned.employee.id));
    assert_eq!(provisioned.employee.user_id, Some(provisioned.user.id));

    // The default credential works immediately
    let auth = Authenticator::new(ctx.uow.clone(), Config::for_tests());
    let token = auth
        .login(
            "alice johnson".to_string(),
            DEFAULT_EMPLOYEE_PASSWORD.to_string(),
        )
        .await
        .unwrap();
    let claims = auth.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.employee_id, Some(provisioned.employee.id));

    ctx.cleanup().await;
}

#[tokio::test]
async fn test_provisioning_duplicate_name_conflicts() {
    let ctx = pg_context!();

    ctx.employees()
        .provision_employee("Bob Smith".to_string(), 12.0)
        .await
        .unwrap();

    let result = ctx
        .employees()
        .provision_employee("Bob Smith".to_string(), 14.0)
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    // The failed attempt must not leave a second employee behind
    let employees = ctx.employees().list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);

    ctx.cleanup().await;
}

#[tokio::test]
async fn test_failed_transaction_rolls_back() {
    let ctx = pg_context!();

    let result: AppResult<()> = ctx
        .uow
        .transaction(|tx| {
            Box::pin(async move {
                tx.users()
                    .create(NewUser {
                        username: "ghost".to_string(),
                        password_hash: "hash".to_string(),
                        role: UserRole::Employee,
                        employee_id: None,
                    })
                    .await?;

                Err(AppError::validation("forced failure"))
            })
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // The insert inside the failed transaction is gone
    let ghost = ctx.uow.users().find_by_username("ghost").await.unwrap();
    assert!(ghost.is_none());

    ctx.cleanup().await;
}

#[tokio::test]
async fn test_delete_employee_removes_account_and_records() {
    let ctx = pg_context!();

    let provisioned = ctx
        .employees()
        .provision_employee("Carol Danvers".to_string(), 20.0)
        .await
        .unwrap();
    let employee_id = provisioned.employee.id;

    ctx.work_records()
        .create_record(employee_id, date(10), 8.0)
        .await
        .unwrap();
    ctx.work_records()
        .create_record(employee_id, date(11), 6.5)
        .await
        .unwrap();

    ctx.employees().delete_employee(employee_id).await.unwrap();

    let employee = ctx.uow.employees().find_by_id(employee_id).await.unwrap();
    assert!(employee.is_none());

    let user = ctx
        .uow
        .users()
        .find_by_username("carol danvers")
        .await
        .unwrap();
    assert!(user.is_none());

    let records = ctx
        .uow
        .work_records()
        .list_rows_for_employee(employee_id, None)
        .await
        .unwrap();
    assert!(records.is_empty());

    ctx.cleanup().await;
}

#[tokio::test]
async fn test_report_round_trip() {
    let ctx = pg_context!();

    let provisioned = ctx
        .employees()
        .provision_employee("Dave Grohl".to_string(), 25.0)
        .await
        .unwrap();
    let employee_id = provisioned.employee.id;

    ctx.work_records()
        .create_record(employee_id, date(15), 8.0)
        .await
        .unwrap();

    let report = ctx
        .reports()
        .generate(ReportKind::Earnings, date(1), date(31), Some(employee_id))
        .await
        .unwrap();
    assert_eq!(report.employee_name.as_deref(), Some("Dave Grohl"));

    let document = ctx.reports().download(report.id).await.unwrap();
    assert!(document.content.starts_with(b"%PDF-"));
    assert_eq!(document.meta.kind, ReportKind::Earnings);
    assert_eq!(document.meta.start_date, date(1));

    // The owner sees it; anyone else does not
    let owned = ctx
        .reports()
        .download_owned(report.id, employee_id)
        .await
        .unwrap();
    assert_eq!(owned.meta.id, report.id);

    let listed = ctx.reports().list_recent().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, report.id);

    ctx.cleanup().await;
}
