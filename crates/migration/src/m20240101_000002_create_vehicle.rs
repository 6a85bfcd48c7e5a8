//! Create `vehicle` table with FK to `client`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::ClientId).not_null())
                    .col(integer(Vehicle::Year).not_null())
                    .col(string_len(Vehicle::Make, 64).not_null())
                    .col(string_len(Vehicle::Model, 64).not_null())
                    .col(ColumnDef::new(Vehicle::Vin).string_len(17).null())
                    .col(ColumnDef::new(Vehicle::LicensePlate).string_len(16).null())
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Vehicle::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_client")
                            .from(Vehicle::Table, Vehicle::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, Id, ClientId, Year, Make, Model, Vin, LicensePlate, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Client { Table, Id }
