//! Appointment status reference set.

pub mod repository;
pub mod service;

pub use repository::{SeaOrmStatusRepository, StatusModel, StatusRepository};
pub use service::StatusService;
