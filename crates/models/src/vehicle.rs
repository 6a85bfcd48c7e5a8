use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{appointment, client, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Client, Appointment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity).from(Column::ClientId).to(client::Column::Id).into(),
            Relation::Appointment => Entity::has_many(appointment::Entity).into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_year(year: i32) -> Result<(), errors::ModelError> {
    let max = Utc::now().year() + 1;
    if !(1900..=max).contains(&year) {
        return Err(errors::ModelError::Validation(format!("year must be within 1900..={max}")));
    }
    Ok(())
}

pub fn validate_vin(vin: Option<&str>) -> Result<(), errors::ModelError> {
    if let Some(v) = vin {
        if v.len() != 17 || !v.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(errors::ModelError::Validation("vin must be 17 alphanumeric characters".into()));
        }
    }
    Ok(())
}

pub fn validate(year: i32, make: &str, model: &str, vin: Option<&str>) -> Result<(), errors::ModelError> {
    validate_year(year)?;
    if make.trim().is_empty() { return Err(errors::ModelError::required("make")); }
    if model.trim().is_empty() { return Err(errors::ModelError::required("model")); }
    validate_vin(vin)
}

pub async fn create(
    db: &DatabaseConnection,
    client_id: i32,
    year: i32,
    make: &str,
    model: &str,
    vin: Option<String>,
    license_plate: Option<String>,
) -> Result<Model, errors::ModelError> {
    let vin = client::normalize_optional(vin).map(|v| v.to_ascii_uppercase());
    validate(year, make, model, vin.as_deref())?;
    let now = Utc::now().into();
    let am = ActiveModel {
        client_id: Set(client_id),
        year: Set(year),
        make: Set(make.trim().to_string()),
        model: Set(model.trim().to_string()),
        vin: Set(vin),
        license_plate: Set(client::normalize_optional(license_plate)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
