//! Service layer for the shop backend: repositories over the entity store and
//! the use cases built on them.
//! - Repository traits per aggregate with SeaORM adapters and in-memory mocks.
//! - Reuses validation and entity definitions in `models` crate.
//! - Appointment composition lives in `workflow`, free of any transport.

pub mod errors;
pub mod notification;
pub mod pagination;

pub mod appointment;
pub mod catalog;
pub mod client;
pub mod status;
pub mod vehicle;
pub mod workflow;

#[cfg(test)]
pub mod test_support;
