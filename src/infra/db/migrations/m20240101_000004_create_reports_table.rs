//! Migration: Create reports table.
//!
//! Reports store the rendered PDF bytes inline; a NULL employee_id
//! marks a report covering all employees.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reports::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reports::EmployeeId).uuid().null())
                    .col(ColumnDef::new(Reports::ReportType).string().not_null())
                    .col(ColumnDef::new(Reports::StartDate).date().not_null())
                    .col(ColumnDef::new(Reports::EndDate).date().not_null())
                    .col(ColumnDef::new(Reports::Content).binary().not_null())
                    .col(
                        ColumnDef::new(Reports::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_employee_id")
                    .table(Reports::Table)
                    .col(Reports::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reports_employee_id")
                    .table(Reports::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reports {
    Table,
    Id,
    EmployeeId,
    ReportType,
    StartDate,
    EndDate,
    Content,
    DateCreated,
}
