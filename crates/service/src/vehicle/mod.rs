pub mod domain;
pub mod repository;

pub use domain::{NewVehicle, Vehicle, VehicleDetails};
pub use repository::{SeaOrmVehicleRepository, VehicleRepository};
