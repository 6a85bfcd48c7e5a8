//! Appointments and their service line items.

pub mod domain;
pub mod repository;

pub use domain::{AppointmentDetails, CreateAppointmentRequest, LineItem, LineItemRequest};
pub use repository::{AppointmentRepository, SeaOrmAppointmentRepository};
