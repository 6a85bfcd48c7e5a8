//! Create `status` table and seed the fixed appointment states.
//!
//! Insertion order fixes the ids: `Scheduled` is 1, the default for new
//! appointments.
use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_STATUSES: [&str; 4] = ["Scheduled", "In Progress", "Completed", "Cancelled"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(pk_auto(Status::Id))
                    .col(string_len(Status::Name, 64).unique_key().not_null())
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        for name in SEED_STATUSES {
            let insert = Query::insert()
                .into_table(Status::Table)
                .columns([Status::Name])
                .values_panic([name.into()])
                .to_owned();
            db.execute(db.get_database_backend().build(&insert)).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Status::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Status { Table, Id, Name }
