use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use models::status;

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusModel {
    pub status_id: i32,
    pub status_name: String,
}

impl From<status::Model> for StatusModel {
    fn from(m: status::Model) -> Self { Self { status_id: m.id, status_name: m.name } }
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// All statuses ordered by id.
    async fn list_all(&self) -> Result<Vec<StatusModel>, ServiceError>;
}

pub struct SeaOrmStatusRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStatusRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl StatusRepository for SeaOrmStatusRepository {
    async fn list_all(&self) -> Result<Vec<StatusModel>, ServiceError> {
        let rows = status::Entity::find()
            .order_by_asc(status::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(StatusModel::from).collect())
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;

    #[derive(Default)]
    pub struct MockStatusRepository {
        rows: Vec<StatusModel>,
        fail: bool,
    }

    impl MockStatusRepository {
        /// The four statuses seeded by the migrations.
        pub fn seeded() -> Self {
            let rows = ["Scheduled", "In Progress", "Completed", "Cancelled"]
                .into_iter()
                .zip(1..)
                .map(|(name, id)| StatusModel { status_id: id, status_name: name.into() })
                .collect();
            Self { rows, fail: false }
        }

        pub fn with(rows: Vec<StatusModel>) -> Self { Self { rows, fail: false } }

        pub fn failing() -> Self { Self { rows: Vec::new(), fail: true } }
    }

    #[async_trait]
    impl StatusRepository for MockStatusRepository {
        async fn list_all(&self) -> Result<Vec<StatusModel>, ServiceError> {
            if self.fail {
                return Err(ServiceError::Db("status table unavailable".into()));
            }
            Ok(self.rows.clone())
        }
    }
}
