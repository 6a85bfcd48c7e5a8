//! Create `service` table: the catalog of work the shop offers.
//!
//! Prices are stored as integer cents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(string_len(Service::Name, 128).unique_key().not_null())
                    .col(big_integer(Service::PriceCents).not_null())
                    .col(ColumnDef::new(Service::Description).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Id, Name, PriceCents, Description }
