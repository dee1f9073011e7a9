//! Report database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Report, ReportDocument, ReportKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning employee (NULL for reports spanning all employees)
    pub employee_id: Option<Uuid>,
    pub report_type: String,
    pub start_date: Date,
    pub end_date: Date,
    /// Rendered PDF bytes; immutable once stored
    pub content: Vec<u8>,
    pub date_created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to report metadata (content dropped)
impl From<Model> for Report {
    fn from(model: Model) -> Self {
        Report {
            id: model.id,
            employee_id: model.employee_id,
            kind: ReportKind::from(model.report_type.as_str()),
            start_date: model.start_date,
            end_date: model.end_date,
            date_created: model.date_created,
        }
    }
}

/// Convert database model to a downloadable document
impl From<Model> for ReportDocument {
    fn from(model: Model) -> Self {
        let content = model.content.clone();
        ReportDocument {
            meta: Report::from(model),
            content,
        }
    }
}
