use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointment_service, status, vehicle};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_id: i32,
    pub status_id: i32,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Vehicle, Status, AppointmentService }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vehicle => Entity::belongs_to(vehicle::Entity).from(Column::VehicleId).to(vehicle::Column::Id).into(),
            Relation::Status => Entity::belongs_to(status::Entity).from(Column::StatusId).to(status::Column::Id).into(),
            Relation::AppointmentService => Entity::has_many(appointment_service::Entity).into(),
        }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vehicle.def() }
}

impl Related<status::Entity> for Entity {
    fn to() -> RelationDef { Relation::Status.def() }
}

impl Related<appointment_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::AppointmentService.def() }
}

impl ActiveModelBehavior for ActiveModel {}
