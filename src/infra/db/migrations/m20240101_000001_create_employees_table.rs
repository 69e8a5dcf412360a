//! Migration: Create the Employees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // if_not_exists: databases that already carry the table are adopted as-is
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::BaseSalary).double().not_null())
                    .col(ColumnDef::new(Employees::Address).string().null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    #[iden = "Employees"]
    Table,
    #[iden = "employeeID"]
    EmployeeId,
    #[iden = "name"]
    Name,
    #[iden = "baseSalary"]
    BaseSalary,
    #[iden = "address"]
    Address,
    #[iden = "role"]
    Role,
}
