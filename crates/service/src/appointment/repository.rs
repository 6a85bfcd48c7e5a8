use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{appointment, appointment_service, money, service, status, vehicle};

use super::domain::{AppointmentDetails, CreateAppointmentRequest, LineItem};
use crate::errors::ServiceError;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist an appointment with its line items atomically; returns the new id.
    async fn create(&self, req: CreateAppointmentRequest) -> Result<i32, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<AppointmentDetails>, ServiceError>;
    /// Newest first.
    async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<AppointmentDetails>, ServiceError>;
    /// `Ok(false)` when the appointment does not exist.
    async fn update_status(&self, id: i32, status_id: i32) -> Result<bool, ServiceError>;
}

pub struct SeaOrmAppointmentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

async fn ensure_status<C: ConnectionTrait>(conn: &C, status_id: i32) -> Result<(), ServiceError> {
    status::Entity::find_by_id(status_id)
        .one(conn)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("status"))?;
    Ok(())
}

async fn load_details<C: ConnectionTrait>(
    conn: &C,
    a: appointment::Model,
    st: Option<status::Model>,
) -> Result<AppointmentDetails, ServiceError> {
    let rows = appointment_service::Entity::find()
        .filter(appointment_service::Column::AppointmentId.eq(a.id))
        .order_by_asc(appointment_service::Column::Id)
        .find_also_related(service::Entity)
        .all(conn)
        .await
        .map_err(ServiceError::db)?;
    let services: Vec<LineItem> = rows
        .into_iter()
        .map(|(item, svc)| LineItem {
            service_id: item.service_id,
            service_name: svc.map(|s| s.name).unwrap_or_default(),
            price: money::from_cents(item.price_cents),
            notes: item.notes,
        })
        .collect();
    Ok(AppointmentDetails {
        appointment_id: a.id,
        vehicle_id: a.vehicle_id,
        status_id: a.status_id,
        status_name: st.map(|s| s.name).unwrap_or_default(),
        notes: a.notes,
        created_at: a.created_at,
        total: services.iter().map(|s| s.price).sum(),
        services,
    })
}

#[async_trait]
impl AppointmentRepository for SeaOrmAppointmentRepository {
    #[instrument(skip(self, req), fields(vehicle_id = req.vehicle_id, items = req.services.len()))]
    async fn create(&self, req: CreateAppointmentRequest) -> Result<i32, ServiceError> {
        req.validate()?;
        let mut priced = Vec::with_capacity(req.services.len());
        for item in &req.services {
            priced.push((item.service_id, money::to_cents(item.price)?, item.notes.clone()));
        }

        // rolled back on drop if any step below fails
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        vehicle::Entity::find_by_id(req.vehicle_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?
            .ok_or_else(|| ServiceError::not_found("vehicle"))?;
        ensure_status(&txn, req.status_id).await?;

        let ids: Vec<i32> = priced.iter().map(|(id, _, _)| *id).collect();
        let known = service::Entity::find()
            .filter(service::Column::Id.is_in(ids.clone()))
            .count(&txn)
            .await
            .map_err(ServiceError::db)?;
        if known != ids.len() as u64 {
            return Err(ServiceError::not_found("service"));
        }

        let now = Utc::now();
        let created = appointment::ActiveModel {
            vehicle_id: Set(req.vehicle_id),
            status_id: Set(req.status_id),
            notes: Set(req.notes.trim().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(ServiceError::db)?;

        let items = priced.into_iter().map(|(service_id, price_cents, notes)| appointment_service::ActiveModel {
            appointment_id: Set(created.id),
            service_id: Set(service_id),
            price_cents: Set(price_cents),
            notes: Set(notes.filter(|n| !n.trim().is_empty())),
            ..Default::default()
        });
        appointment_service::Entity::insert_many(items)
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;

        txn.commit().await.map_err(ServiceError::db)?;
        info!(appointment_id = created.id, "appointment_created");
        Ok(created.id)
    }

    async fn find(&self, id: i32) -> Result<Option<AppointmentDetails>, ServiceError> {
        let found = appointment::Entity::find_by_id(id)
            .find_also_related(status::Entity)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        match found {
            Some((a, st)) => Ok(Some(load_details(&self.db, a, st).await?)),
            None => Ok(None),
        }
    }

    async fn list_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<AppointmentDetails>, ServiceError> {
        let rows = appointment::Entity::find()
            .filter(appointment::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(appointment::Column::CreatedAt)
            .order_by_desc(appointment::Column::Id)
            .find_also_related(status::Entity)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        let mut out = Vec::with_capacity(rows.len());
        for (a, st) in rows {
            out.push(load_details(&self.db, a, st).await?);
        }
        Ok(out)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i32, status_id: i32) -> Result<bool, ServiceError> {
        let Some(existing) = appointment::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(false);
        };
        ensure_status(&self.db, status_id).await?;
        let mut am: appointment::ActiveModel = existing.into();
        am.status_id = Set(status_id);
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(ServiceError::db)?;
        info!("appointment_status_updated");
        Ok(true)
    }
}

/// In-memory mock that records every creation request it receives.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAppointmentRepository {
        requests: Mutex<Vec<CreateAppointmentRequest>>,
        fail: bool,
    }

    impl MockAppointmentRepository {
        pub fn failing() -> Self { Self { requests: Mutex::default(), fail: true } }

        /// Requests accepted so far, in arrival order.
        pub fn requests(&self) -> Vec<CreateAppointmentRequest> {
            self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }
    }

    #[async_trait]
    impl AppointmentRepository for MockAppointmentRepository {
        async fn create(&self, req: CreateAppointmentRequest) -> Result<i32, ServiceError> {
            if self.fail {
                return Err(ServiceError::Db("connection reset".into()));
            }
            req.validate()?;
            let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
            requests.push(req);
            Ok(requests.len() as i32)
        }

        async fn find(&self, _id: i32) -> Result<Option<AppointmentDetails>, ServiceError> { Ok(None) }

        async fn list_by_vehicle(&self, _vehicle_id: i32) -> Result<Vec<AppointmentDetails>, ServiceError> { Ok(Vec::new()) }

        async fn update_status(&self, _id: i32, _status_id: i32) -> Result<bool, ServiceError> { Ok(false) }
    }
}
