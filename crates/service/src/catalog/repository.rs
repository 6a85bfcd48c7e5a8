use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use models::service;

use super::domain::{NewService, ServiceModel};
use crate::errors::ServiceError;

/// Repository abstraction for the service catalog.
#[async_trait]
pub trait ServiceCatalogRepository: Send + Sync {
    /// Whole catalog ordered by name.
    async fn list_all(&self) -> Result<Vec<ServiceModel>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<ServiceModel>, ServiceError>;
    async fn add(&self, input: NewService) -> Result<i32, ServiceError>;
}

pub struct SeaOrmServiceCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceCatalogRepository for SeaOrmServiceCatalogRepository {
    async fn list_all(&self) -> Result<Vec<ServiceModel>, ServiceError> {
        let rows = service::Entity::find()
            .order_by_asc(service::Column::Name)
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(ServiceModel::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<ServiceModel>, ServiceError> {
        let found = service::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(found.map(ServiceModel::from))
    }

    async fn add(&self, input: NewService) -> Result<i32, ServiceError> {
        let taken = service::Entity::find()
            .filter(service::Column::Name.eq(input.service_name.trim()))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        if taken.is_some() {
            return Err(ServiceError::Validation("service name already exists".into()));
        }
        let created = service::create(&self.db, &input.service_name, input.price, input.description).await?;
        info!(service_id = created.id, name = %created.name, "catalog_service_created");
        Ok(created.id)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockServiceCatalogRepository {
        rows: Mutex<Vec<ServiceModel>>,
        fail: bool,
    }

    impl MockServiceCatalogRepository {
        pub fn with(rows: Vec<ServiceModel>) -> Self {
            Self { rows: Mutex::new(rows), fail: false }
        }

        /// Every call fails as if the store were unreachable.
        pub fn failing() -> Self {
            Self { rows: Mutex::default(), fail: true }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.fail { Err(ServiceError::Db("catalog unavailable".into())) } else { Ok(()) }
        }
    }

    #[async_trait]
    impl ServiceCatalogRepository for MockServiceCatalogRepository {
        async fn list_all(&self) -> Result<Vec<ServiceModel>, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner()).clone();
            rows.sort_by(|a, b| a.service_name.cmp(&b.service_name));
            Ok(rows)
        }

        async fn find(&self, id: i32) -> Result<Option<ServiceModel>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
            Ok(rows.iter().find(|s| s.service_id == id).cloned())
        }

        async fn add(&self, input: NewService) -> Result<i32, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
            if rows.iter().any(|s| s.service_name == input.service_name) {
                return Err(ServiceError::Validation("service name already exists".into()));
            }
            let id = rows.iter().map(|s| s.service_id).max().unwrap_or(0) + 1;
            rows.push(ServiceModel { service_id: id, service_name: input.service_name, price: input.price, description: input.description });
            Ok(id)
        }
    }
}
