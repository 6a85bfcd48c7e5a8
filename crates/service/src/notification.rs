use serde::{Deserialize, Serialize};

/// Field-level message surfaced next to the input identified by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub key: String,
    pub message: String,
}

impl Notification {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self { key: key.into(), message: message.into() }
    }
}
