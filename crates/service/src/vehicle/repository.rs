use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument};

use models::{client, vehicle};

use super::domain::{NewVehicle, Vehicle, VehicleDetails};
use crate::errors::ServiceError;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Owner must exist.
    async fn add(&self, input: NewVehicle) -> Result<i32, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Vehicle>, ServiceError>;
    async fn find_details(&self, id: i32) -> Result<Option<VehicleDetails>, ServiceError>;
    /// Newest model year first.
    async fn list_by_client(&self, client_id: i32) -> Result<Vec<Vehicle>, ServiceError>;
    /// `Ok(false)` when the id does not exist.
    async fn update(&self, vehicle: Vehicle) -> Result<bool, ServiceError>;
}

pub struct SeaOrmVehicleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn ensure_client(&self, client_id: i32) -> Result<(), ServiceError> {
        client::Entity::find_by_id(client_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("client"))?;
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    #[instrument(skip(self, input), fields(client_id = input.client_id))]
    async fn add(&self, input: NewVehicle) -> Result<i32, ServiceError> {
        self.ensure_client(input.client_id).await?;
        let created = vehicle::create(&self.db, input.client_id, input.year, &input.make, &input.model, input.vin, input.license_plate).await?;
        info!(vehicle_id = created.id, "vehicle_created");
        Ok(created.id)
    }

    async fn find(&self, id: i32) -> Result<Option<Vehicle>, ServiceError> {
        let found = vehicle::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(found.map(Vehicle::from))
    }

    async fn find_details(&self, id: i32) -> Result<Option<VehicleDetails>, ServiceError> {
        let found = vehicle::Entity::find_by_id(id)
            .find_also_related(client::Entity)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(found.and_then(|(v, c)| {
            c.map(|c| VehicleDetails {
                vehicle_id: v.id,
                client_id: v.client_id,
                year: v.year,
                make: v.make,
                model: v.model,
                first_name: c.first_name,
                last_name: c.last_name,
            })
        }))
    }

    async fn list_by_client(&self, client_id: i32) -> Result<Vec<Vehicle>, ServiceError> {
        let rows = vehicle::Entity::find()
            .filter(vehicle::Column::ClientId.eq(client_id))
            .order_by_desc(vehicle::Column::Year)
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    #[instrument(skip(self, v), fields(vehicle_id = v.vehicle_id))]
    async fn update(&self, v: Vehicle) -> Result<bool, ServiceError> {
        let Some(existing) = vehicle::Entity::find_by_id(v.vehicle_id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(false);
        };
        let vin = client::normalize_optional(v.vin).map(|s| s.to_ascii_uppercase());
        vehicle::validate(v.year, &v.make, &v.model, vin.as_deref())?;
        if existing.client_id != v.client_id {
            self.ensure_client(v.client_id).await?;
        }
        let mut am: vehicle::ActiveModel = existing.into();
        am.client_id = Set(v.client_id);
        am.year = Set(v.year);
        am.make = Set(v.make.trim().to_string());
        am.model = Set(v.model.trim().to_string());
        am.vin = Set(vin);
        am.license_plate = Set(client::normalize_optional(v.license_plate));
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(ServiceError::db)?;
        info!("vehicle_updated");
        Ok(true)
    }
}
