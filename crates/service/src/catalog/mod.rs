//! Service catalog: the list of work the shop sells, used to populate the
//! appointment service picker.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NewService, ServiceModel};
pub use repository::{SeaOrmServiceCatalogRepository, ServiceCatalogRepository};
pub use service::ServiceService;
