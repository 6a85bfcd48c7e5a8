use std::sync::Arc;

use tracing::instrument;

use super::repository::{StatusModel, StatusRepository};
use crate::errors::ServiceError;

pub struct StatusService<R: StatusRepository> {
    repo: Arc<R>,
}

impl<R: StatusRepository> StatusService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<StatusModel>, ServiceError> { self.repo.list_all().await }
}
