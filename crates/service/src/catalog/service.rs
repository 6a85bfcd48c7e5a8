use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::{NewService, ServiceModel};
use super::repository::ServiceCatalogRepository;
use crate::errors::ServiceError;

/// Use-case facade over the catalog repository.
pub struct ServiceService<R: ServiceCatalogRepository> {
    repo: Arc<R>,
}

impl<R: ServiceCatalogRepository> ServiceService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Full catalog for the service picker. No paging; the catalog is small.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{ServiceService, ServiceModel};
    /// use service::catalog::repository::mock::MockServiceCatalogRepository;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let repo = MockServiceCatalogRepository::with(vec![
    ///     ServiceModel { service_id: 2, service_name: "Smog Check".into(), price: Decimal::new(4950, 2), description: None },
    ///     ServiceModel { service_id: 1, service_name: "Oil Change".into(), price: Decimal::new(2999, 2), description: None },
    /// ]);
    /// let svc = ServiceService::new(Arc::new(repo));
    /// let all = tokio_test::block_on(svc.get_all()).unwrap();
    /// assert_eq!(all[0].service_name, "Oil Change");
    /// ```
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<ServiceModel>, ServiceError> {
        let all = self.repo.list_all().await?;
        debug!(count = all.len(), "catalog_loaded");
        Ok(all)
    }

    pub async fn find(&self, id: i32) -> Result<Option<ServiceModel>, ServiceError> { self.repo.find(id).await }

    pub async fn add(&self, input: NewService) -> Result<i32, ServiceError> {
        if input.service_name.trim().is_empty() {
            return Err(ServiceError::Validation("service name required".into()));
        }
        self.repo.add(input).await
    }
}
