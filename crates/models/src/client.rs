use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, vehicle};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Vehicle }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Vehicle => Entity::has_many(vehicle::Entity).into() }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vehicle.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() { return Err(errors::ModelError::required(field)); }
    if value.chars().count() > 64 {
        return Err(errors::ModelError::Validation(format!("{field} too long (<=64)")));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), errors::ModelError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if phone.trim().is_empty() { return Err(errors::ModelError::required("phone")); }
    if digits < 7 || phone.len() > 32 {
        return Err(errors::ModelError::Validation("invalid phone".into()));
    }
    Ok(())
}

pub fn validate_email(email: Option<&str>) -> Result<(), errors::ModelError> {
    match email {
        Some(e) if !e.trim().is_empty() && !e.contains('@') => {
            Err(errors::ModelError::Validation("invalid email".into()))
        }
        _ => Ok(()),
    }
}

/// Blank optional fields are stored as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn validate(first_name: &str, last_name: &str, email: Option<&str>, phone: &str) -> Result<(), errors::ModelError> {
    validate_name("first_name", first_name)?;
    validate_name("last_name", last_name)?;
    validate_phone(phone)?;
    validate_email(email)
}

pub async fn create(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: Option<String>,
    phone: &str,
    address: Option<String>,
) -> Result<Model, errors::ModelError> {
    let email = normalize_optional(email);
    validate(first_name, last_name, email.as_deref(), phone)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        first_name: Set(first_name.trim().to_string()),
        last_name: Set(last_name.trim().to_string()),
        email: Set(email),
        phone: Set(phone.trim().to_string()),
        address: Set(normalize_optional(address)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
