use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::appointment::{AppointmentRepository, SeaOrmAppointmentRepository};
use service::catalog::{SeaOrmServiceCatalogRepository, ServiceService};
use service::client::{ClientRepository, SeaOrmClientRepository};
use service::status::{SeaOrmStatusRepository, StatusService};
use service::vehicle::{SeaOrmVehicleRepository, VehicleRepository};

/// Shared handler state; every repository sits on the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub catalog: Arc<ServiceService<SeaOrmServiceCatalogRepository>>,
    pub statuses: Arc<StatusService<SeaOrmStatusRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            clients: Arc::new(SeaOrmClientRepository::new(db.clone())),
            vehicles: Arc::new(SeaOrmVehicleRepository::new(db.clone())),
            appointments: Arc::new(SeaOrmAppointmentRepository::new(db.clone())),
            catalog: Arc::new(ServiceService::new(Arc::new(SeaOrmServiceCatalogRepository::new(db.clone())))),
            statuses: Arc::new(StatusService::new(Arc::new(SeaOrmStatusRepository::new(db)))),
        }
    }
}
