//! SeaORM entities for the shop, with the field validators and store
//! conversions shared by the service layer.

pub mod errors;
pub mod db;
pub mod money;
pub mod client;
pub mod vehicle;
pub mod service;
pub mod status;
pub mod appointment;
pub mod appointment_service;

#[cfg(test)]
mod tests;
