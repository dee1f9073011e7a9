//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub role: String,
    /// Linked employee row (NULL for admin accounts)
    pub employee_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            role: UserRole::from(model.role.as_str()),
            employee_id: model.employee_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
