//! User repository - credential storage and lookup.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by username (usernames are unique)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, data: NewUser) -> AppResult<User>;

    /// Replace the stored credential hash
    async fn update_password(&self, id: Uuid, password_hash: String) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let model = new_user_model(data).insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> AppResult<()> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.password_hash = Set(password_hash);
        active.updated_at = Set(chrono::Utc::now());
        active.update(&self.db).await.map_err(AppError::from)?;

        Ok(())
    }
}

/// Build an insertable model from new-user data (shared with the
/// transactional store).
pub(crate) fn new_user_model(data: NewUser) -> ActiveModel {
    let now = chrono::Utc::now();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(data.username),
        password_hash: Set(data.password_hash),
        role: Set(data.role.to_string()),
        employee_id: Set(data.employee_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
