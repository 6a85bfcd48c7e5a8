use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Client: listing sorts by last name by default
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_client_last_first")
                    .table(Client::Table)
                    .col(Client::LastName)
                    .col(Client::FirstName)
                    .to_owned(),
            )
            .await?;

        // Vehicle: lookups by owner
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vehicle_client")
                    .table(Vehicle::Table)
                    .col(Vehicle::ClientId)
                    .to_owned(),
            )
            .await?;

        // Appointment: history per vehicle
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointment_vehicle")
                    .table(Appointment::Table)
                    .col(Appointment::VehicleId)
                    .to_owned(),
            )
            .await?;

        // AppointmentService: a service appears at most once per appointment
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_appointment_service")
                    .table(AppointmentService::Table)
                    .col(AppointmentService::AppointmentId)
                    .col(AppointmentService::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_appointment_service").table(AppointmentService::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_vehicle").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicle_client").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_client_last_first").table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client { Table, LastName, FirstName }

#[derive(DeriveIden)]
enum Vehicle { Table, ClientId }

#[derive(DeriveIden)]
enum Appointment { Table, VehicleId }

#[derive(DeriveIden)]
enum AppointmentService { Table, AppointmentId, ServiceId }
