//! Line item of an appointment: one catalog service plus the price it was
//! booked at.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointment, service};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub appointment_id: i32,
    pub service_id: i32,
    pub price_cents: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Appointment, Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::belongs_to(appointment::Entity).from(Column::AppointmentId).to(appointment::Column::Id).into(),
            Relation::Service => Entity::belongs_to(service::Entity).from(Column::ServiceId).to(service::Column::Id).into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}
