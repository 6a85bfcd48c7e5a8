//! Client repository: add, lookup, paged listing and update.

pub mod domain;
pub mod query;
pub mod repository;

pub use domain::{Client, NewClient};
pub use query::{ClientQuery, ClientSortField};
pub use repository::{ClientRepository, SeaOrmClientRepository};
