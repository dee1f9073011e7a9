//! Employee repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, NewEmployee};
use crate::errors::{AppError, AppResult};

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// List all employees ordered by name
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(&self, data: NewEmployee) -> AppResult<Employee>;

    /// Update name and hourly rate
    async fn update(&self, id: Uuid, name: String, hourly_rate: f64) -> AppResult<Employee>;

    /// Count all employees
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployeeRepository over SeaORM
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, data: NewEmployee) -> AppResult<Employee> {
        let model = new_employee_model(data)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: Uuid, name: String, hourly_rate: f64) -> AppResult<Employee> {
        let existing = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.hourly_rate = Set(hourly_rate);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        EmployeeEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// Build an insertable model from new-employee data (shared with the
/// transactional store).
pub(crate) fn new_employee_model(data: NewEmployee) -> ActiveModel {
    let now = chrono::Utc::now();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(data.name),
        hourly_rate: Set(data.hourly_rate),
        user_id: Set(data.user_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
