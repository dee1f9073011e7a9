//! Migration: Create work records table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkRecords::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(WorkRecords::Date).date().not_null())
                    .col(ColumnDef::new(WorkRecords::HoursWorked).double().not_null())
                    .col(
                        ColumnDef::new(WorkRecords::AmountEarned)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings filter by employee, reports by date range
        manager
            .create_index(
                Index::create()
                    .name("idx_work_records_employee_id")
                    .table(WorkRecords::Table)
                    .col(WorkRecords::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_records_date")
                    .table(WorkRecords::Table)
                    .col(WorkRecords::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_work_records_date")
                    .table(WorkRecords::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_work_records_employee_id")
                    .table(WorkRecords::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorkRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkRecords {
    Table,
    Id,
    EmployeeId,
    Date,
    HoursWorked,
    AmountEarned,
}
