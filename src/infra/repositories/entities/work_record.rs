//! Work record database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::WorkRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: Date,
    pub hours_worked: f64,
    /// Derived at entry time from the employee's then-current rate
    pub amount_earned: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for WorkRecord {
    fn from(model: Model) -> Self {
        WorkRecord {
            id: model.id,
            employee_id: model.employee_id,
            date: model.date,
            hours_worked: model.hours_worked,
            amount_earned: model.amount_earned,
        }
    }
}
