use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    pub service_id: i32,
    pub service_name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<models::service::Model> for ServiceModel {
    fn from(m: models::service::Model) -> Self {
        Self { service_id: m.id, price: m.price(), service_name: m.name, description: m.description }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub service_name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}
