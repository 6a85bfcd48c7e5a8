use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument, warn};

use models::client;

use super::domain::{Client, NewClient};
use super::query::{search_condition, ClientQuery};
use crate::errors::ServiceError;
use crate::pagination::PagedResult;

/// Repository abstraction for client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a client and return its store-assigned id.
    async fn add(&self, input: NewClient) -> Result<i32, ServiceError>;
    /// `Ok(None)` when no client has this id.
    async fn find(&self, id: i32) -> Result<Option<Client>, ServiceError>;
    /// Filter, sort and slice the client list.
    async fn get_clients(&self, query: &ClientQuery) -> Result<PagedResult<Client>, ServiceError>;
    /// `Ok(false)` without touching the store when the id does not exist.
    async fn update(&self, client: Client) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    #[instrument(skip(self, input), fields(last_name = %input.last_name))]
    async fn add(&self, input: NewClient) -> Result<i32, ServiceError> {
        let created = client::create(&self.db, &input.first_name, &input.last_name, input.email, &input.phone, input.address).await?;
        info!(client_id = created.id, "client_created");
        Ok(created.id)
    }

    async fn find(&self, id: i32) -> Result<Option<Client>, ServiceError> {
        let found = client::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(found.map(Client::from))
    }

    #[instrument(skip(self))]
    async fn get_clients(&self, query: &ClientQuery) -> Result<PagedResult<Client>, ServiceError> {
        let (page_idx, per_page) = query.pagination().normalize();
        let (field, recognised) = query.sort_field();
        if !recognised {
            warn!(sort_by = ?query.sort_by, fallback = ?field, "unknown sort field; using default");
        }
        let order = query.direction().as_order();

        let mut finder = client::Entity::find();
        if let Some(q) = query.search() {
            finder = finder.filter(search_condition(q, self.db.get_database_backend()));
        }
        // id as tie-breaker keeps the order total, so flipping direction reverses it exactly
        let finder = finder.order_by(field.column(), order.clone()).order_by(client::Column::Id, order);

        let paginator = finder.paginate(&self.db, per_page);
        let total = paginator.num_items().await.map_err(ServiceError::db)?;
        let rows = paginator.fetch_page(page_idx).await.map_err(ServiceError::db)?;
        Ok(PagedResult::new(rows.into_iter().map(Client::from).collect(), page_idx, per_page, total))
    }

    #[instrument(skip(self, c), fields(client_id = c.client_id))]
    async fn update(&self, c: Client) -> Result<bool, ServiceError> {
        let Some(existing) = client::Entity::find_by_id(c.client_id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(false);
        };
        let email = client::normalize_optional(c.email);
        client::validate(&c.first_name, &c.last_name, email.as_deref(), &c.phone)?;
        let mut am: client::ActiveModel = existing.into();
        am.first_name = Set(c.first_name.trim().to_string());
        am.last_name = Set(c.last_name.trim().to_string());
        am.email = Set(email);
        am.phone = Set(c.phone.trim().to_string());
        am.address = Set(client::normalize_optional(c.address));
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(ServiceError::db)?;
        info!("client_updated");
        Ok(true)
    }
}
