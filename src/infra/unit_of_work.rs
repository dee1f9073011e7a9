//! Unit of Work pattern implementation.
//!
//! SOLID (SRP): Manages transaction lifecycle and repository access.
//! DDD: Coordinates operations across multiple aggregates atomically.
//!
//! The Unit of Work pattern:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Ensures consistency across multiple repository operations
//! - Provides atomic operations for complex business workflows

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    new_employee_model, new_user_model, EmployeeRepository, EmployeeStore, ReportRepository,
    ReportStore, UserRepository, UserStore, WorkRecordRepository, WorkRecordStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock at the repository level or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Get work record repository
    fn work_records(&self) -> Arc<dyn WorkRecordRepository>;

    /// Get report repository
    fn reports(&self) -> Arc<dyn ReportRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled back on error.
    /// Uses ReadCommitted isolation level for balanced consistency/performance.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction. The context borrows the transaction
/// to ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }

    /// Get employee repository for this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository::new(self.txn)
    }

    /// Get work record repository for this transaction
    pub fn work_records(&self) -> TxWorkRecordRepository<'_> {
        TxWorkRecordRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    employee_repo: Arc<EmployeeStore>,
    work_record_repo: Arc<WorkRecordStore>,
    report_repo: Arc<ReportStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let employee_repo = Arc::new(EmployeeStore::new(db.clone()));
        let work_record_repo = Arc::new(WorkRecordStore::new(db.clone()));
        let report_repo = Arc::new(ReportStore::new(db.clone()));
        Self {
            db,
            user_repo,
            employee_repo,
            work_record_repo,
            report_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn work_records(&self) -> Arc<dyn WorkRecordRepository> {
        self.work_record_repo.clone()
    }

    fn reports(&self) -> Arc<dyn ReportRepository> {
        self.report_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Begin transaction
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        // Execute the closure
        match f(ctx).await {
            Ok(result) => {
                // Commit on success - txn is owned, so this always works
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
///
/// Executes all operations within the provided transaction.
/// Uses borrowed reference to ensure transaction outlives repository operations.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<crate::domain::User>> {
        use super::repositories::entities::user::{self, Entity as UserEntity};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(crate::domain::User::from))
    }

    /// Create a new user
    pub async fn create(&self, data: crate::domain::NewUser) -> AppResult<crate::domain::User> {
        use sea_orm::ActiveModelTrait;

        let model = new_user_model(data)
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(crate::domain::User::from(model))
    }

    /// Point a user at its employee record
    pub async fn link_employee(
        &self,
        user_id: uuid::Uuid,
        employee_id: uuid::Uuid,
    ) -> AppResult<crate::domain::User> {
        use super::repositories::entities::user::{ActiveModel, Entity as UserEntity};
        use sea_orm::{ActiveModelTrait, EntityTrait, Set};

        let user = UserEntity::find_by_id(user_id)
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();
        active.employee_id = Set(Some(employee_id));
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.txn).await.map_err(AppError::from)?;

        Ok(crate::domain::User::from(model))
    }

    /// Delete user by ID
    pub async fn delete(&self, id: uuid::Uuid) -> AppResult<()> {
        use super::repositories::entities::user::Entity as UserEntity;
        use sea_orm::EntityTrait;

        let result = UserEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Transaction-aware employee repository.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Create a new employee
    pub async fn create(
        &self,
        data: crate::domain::NewEmployee,
    ) -> AppResult<crate::domain::Employee> {
        use sea_orm::ActiveModelTrait;

        let model = new_employee_model(data)
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(crate::domain::Employee::from(model))
    }

    /// Delete employee by ID
    pub async fn delete(&self, id: uuid::Uuid) -> AppResult<()> {
        use super::repositories::entities::employee::Entity as EmployeeEntity;
        use sea_orm::EntityTrait;

        let result = EmployeeEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Transaction-aware work record repository.
pub struct TxWorkRecordRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxWorkRecordRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Delete every record belonging to an employee, returning the count
    pub async fn delete_for_employee(&self, employee_id: uuid::Uuid) -> AppResult<u64> {
        use super::repositories::entities::work_record::{self, Entity as WorkRecordEntity};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let result = WorkRecordEntity::delete_many()
            .filter(work_record::Column::EmployeeId.eq(employee_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
