//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Employee;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub hourly_rate: f64,
    /// Linked login account (NULL once the account has been removed)
    pub user_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            hourly_rate: model.hourly_rate,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
