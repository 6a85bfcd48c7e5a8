//! Catalog entry for a unit of work the shop sells.
use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors, money};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn price(&self) -> Decimal { money::from_cents(self.price_cents) }
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
    description: Option<String>,
) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::required("name")); }
    let price_cents = money::to_cents(price)?;
    let am = ActiveModel {
        name: Set(name.trim().to_string()),
        price_cents: Set(price_cents),
        description: Set(description.filter(|d| !d.trim().is_empty())),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
