use thiserror::Error;

use super::composer::ComposerState;
use crate::errors::ServiceError;
use crate::notification::Notification;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("composer cannot do that while {0:?}")]
    NotReady(ComposerState),
    #[error("{}: {}", .0.key, .0.message)]
    Validation(Notification),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
