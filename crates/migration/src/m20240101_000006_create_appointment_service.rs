//! Create `appointment_service` table: line items of an appointment.
//!
//! `price_cents` is a snapshot taken at booking time and is never re-read
//! from the catalog.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentService::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentService::Id))
                    .col(integer(AppointmentService::AppointmentId).not_null())
                    .col(integer(AppointmentService::ServiceId).not_null())
                    .col(big_integer(AppointmentService::PriceCents).not_null())
                    .col(ColumnDef::new(AppointmentService::Notes).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_appointment")
                            .from(AppointmentService::Table, AppointmentService::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_service")
                            .from(AppointmentService::Table, AppointmentService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppointmentService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppointmentService { Table, Id, AppointmentId, ServiceId, PriceCents, Notes }

#[derive(DeriveIden)]
enum Appointment { Table, Id }

#[derive(DeriveIden)]
enum Service { Table, Id }
