use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub client_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: i32,
    pub client_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
}

impl Vehicle {
    pub fn from_input(vehicle_id: i32, input: NewVehicle) -> Self {
        Self {
            vehicle_id,
            client_id: input.client_id,
            year: input.year,
            make: input.make,
            model: input.model,
            vin: input.vin,
            license_plate: input.license_plate,
        }
    }
}

impl From<models::vehicle::Model> for Vehicle {
    fn from(m: models::vehicle::Model) -> Self {
        Self {
            vehicle_id: m.id,
            client_id: m.client_id,
            year: m.year,
            make: m.make,
            model: m.model,
            vin: m.vin,
            license_plate: m.license_plate,
        }
    }
}

/// Vehicle joined with its owner, as shown in the appointment header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub vehicle_id: i32,
    pub client_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub first_name: String,
    pub last_name: String,
}

impl VehicleDetails {
    /// "2012 Honda Civic"
    pub fn description(&self) -> String { format!("{} {} {}", self.year, self.make, self.model) }

    pub fn owner_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
}
