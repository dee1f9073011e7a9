//! Employee service - Handles employee lifecycle business logic.
//!
//! SOLID (SRP): Handles employee-related use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.
//!
//! Provisioning and deletion span users, employees, and work records;
//! both run inside a single transaction so a failure at any step
//! leaves no partial state behind.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DEFAULT_EMPLOYEE_PASSWORD;
use crate::domain::{Employee, EmployeeProfile, NewEmployee, NewUser, Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Outcome of provisioning: the employee record and its login account.
#[derive(Debug)]
pub struct ProvisionedEmployee {
    pub employee: Employee,
    pub user: User,
}

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List all employees ordered by name
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID
    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// Create an employee together with its login account.
    ///
    /// The username is the lower-cased name and the account starts
    /// with the default credential. User insert, employee insert, and
    /// the back-link update commit atomically.
    async fn provision_employee(
        &self,
        name: String,
        hourly_rate: f64,
    ) -> AppResult<ProvisionedEmployee>;

    /// Update name and hourly rate.
    ///
    /// The stored amounts of existing work records are not recomputed;
    /// only future entries and edits pick up the new rate.
    async fn update_employee(&self, id: Uuid, name: String, hourly_rate: f64)
        -> AppResult<Employee>;

    /// Delete an employee, its login account, and its work records.
    ///
    /// Refused when the linked account is an admin. The three deletes
    /// commit atomically.
    async fn delete_employee(&self, id: Uuid) -> AppResult<()>;

    /// Get an employee joined with its login username
    async fn get_profile(&self, employee_id: Uuid) -> AppResult<EmployeeProfile>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn validate_employee_input(name: &str, hourly_rate: f64) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("Employee name is required"));
    }
    if hourly_rate <= 0.0 {
        return Err(AppError::validation("Hourly rate must be greater than 0"));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn provision_employee(
        &self,
        name: String,
        hourly_rate: f64,
    ) -> AppResult<ProvisionedEmployee> {
        let name = name.trim().to_string();
        validate_employee_input(&name, hourly_rate)?;

        let username = name.to_lowercase();
        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An employee with username {username}"
            )));
        }

        // Hash outside the transaction; argon2 is deliberately slow
        let password_hash = Password::new(DEFAULT_EMPLOYEE_PASSWORD)?.into_string();

        let provisioned = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let user = ctx
                        .users()
                        .create(NewUser {
                            username,
                            password_hash,
                            role: UserRole::Employee,
                            employee_id: None,
                        })
                        .await?;

                    let employee = ctx
                        .employees()
                        .create(NewEmployee {
                            name,
                            hourly_rate,
                            user_id: Some(user.id),
                        })
                        .await?;

                    let user = ctx.users().link_employee(user.id, employee.id).await?;

                    Ok(ProvisionedEmployee { employee, user })
                })
            })
            .await?;

        tracing::info!(
            employee_id = %provisioned.employee.id,
            username = %provisioned.user.username,
            "Provisioned employee account"
        );

        Ok(provisioned)
    }

    async fn update_employee(
        &self,
        id: Uuid,
        name: String,
        hourly_rate: f64,
    ) -> AppResult<Employee> {
        let name = name.trim().to_string();
        validate_employee_input(&name, hourly_rate)?;

        self.uow.employees().update(id, name, hourly_rate).await
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        let employee = self
            .uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let linked_user = match employee.user_id {
            Some(user_id) => self.uow.users().find_by_id(user_id).await?,
            None => None,
        };

        if let Some(user) = &linked_user {
            if user.is_admin() {
                return Err(AppError::validation("Cannot delete admin users"));
            }
        }

        let user_id = linked_user.map(|user| user.id);
        let employee_id = employee.id;

        let removed_records = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    if let Some(user_id) = user_id {
                        ctx.users().delete(user_id).await?;
                    }
                    let removed = ctx.work_records().delete_for_employee(employee_id).await?;
                    ctx.employees().delete(employee_id).await?;
                    Ok(removed)
                })
            })
            .await?;

        tracing::info!(%employee_id, records = removed_records, "Deleted employee");

        Ok(())
    }

    async fn get_profile(&self, employee_id: Uuid) -> AppResult<EmployeeProfile> {
        let employee = self
            .uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let username = match employee.user_id {
            Some(user_id) => self
                .uow
                .users()
                .find_by_id(user_id)
                .await?
                .map(|user| user.username),
            None => None,
        };

        Ok(EmployeeProfile {
            id: employee.id,
            name: employee.name,
            hourly_rate: employee.hourly_rate,
            username,
            created_at: employee.created_at,
        })
    }
}
