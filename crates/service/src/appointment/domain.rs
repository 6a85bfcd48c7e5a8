use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const EMPTY_SERVICES_MESSAGE: &str = "select at least one service";

/// One requested line item: a catalog service and the price it is booked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub service_id: i32,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Composite creation request: `{ vehicleId, statusId, notes, services: [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub vehicle_id: i32,
    pub status_id: i32,
    #[serde(default)]
    pub notes: String,
    pub services: Vec<LineItemRequest>,
}

impl CreateAppointmentRequest {
    /// Checks that need no store access.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.services.is_empty() {
            return Err(ServiceError::Validation(EMPTY_SERVICES_MESSAGE.into()));
        }
        let mut seen = HashSet::with_capacity(self.services.len());
        for item in &self.services {
            if !seen.insert(item.service_id) {
                return Err(ServiceError::Validation(format!("service {} listed twice", item.service_id)));
            }
            if item.price.is_sign_negative() && !item.price.is_zero() {
                return Err(ServiceError::Validation(format!("price of service {} must not be negative", item.service_id)));
            }
        }
        Ok(())
    }

    pub fn total(&self) -> Decimal { self.services.iter().map(|s| s.price).sum() }
}

/// Stored line item with the catalog name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub service_id: i32,
    pub service_name: String,
    pub price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    pub appointment_id: i32,
    pub vehicle_id: i32,
    pub status_id: i32,
    pub status_name: String,
    pub notes: String,
    pub created_at: DateTime<FixedOffset>,
    pub services: Vec<LineItem>,
    /// Sum of the line item prices; derived, never stored.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(service_id: i32, cents: i64) -> LineItemRequest {
        LineItemRequest { service_id, price: Decimal::new(cents, 2), notes: None }
    }

    #[test]
    fn request_wire_shape_is_camel_case() {
        let req = CreateAppointmentRequest { vehicle_id: 7, status_id: 1, notes: "rattle".into(), services: vec![item(1, 2999)] };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, serde_json::json!({
            "vehicleId": 7, "statusId": 1, "notes": "rattle",
            "services": [{ "serviceId": 1, "price": 29.99 }]
        }));
    }

    #[test]
    fn validate_rejects_empty_and_duplicates() {
        let mut req = CreateAppointmentRequest { vehicle_id: 1, status_id: 1, notes: String::new(), services: vec![] };
        assert!(req.validate().is_err());
        req.services = vec![item(1, 100), item(1, 200)];
        assert!(req.validate().is_err());
        req.services = vec![item(1, 100), item(2, -1)];
        assert!(req.validate().is_err());
        req.services = vec![item(1, 100), item(2, 0)];
        assert!(req.validate().is_ok());
        assert_eq!(req.total(), Decimal::new(100, 2));
    }
}
