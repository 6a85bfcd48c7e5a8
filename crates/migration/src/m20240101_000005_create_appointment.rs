//! Create `appointment` table with FKs to `vehicle` and `status`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::VehicleId).not_null())
                    .col(integer(Appointment::StatusId).not_null())
                    .col(text(Appointment::Notes).not_null())
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_vehicle")
                            .from(Appointment::Table, Appointment::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_status")
                            .from(Appointment::Table, Appointment::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointment { Table, Id, VehicleId, StatusId, Notes, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Vehicle { Table, Id }

#[derive(DeriveIden)]
enum Status { Table, Id }
