//! OpenAPI document. Prices are documented as JSON numbers.
use utoipa::OpenApi;
use utoipa::{IntoParams, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(ToSchema)]
pub struct CreatedDoc { pub id: i32 }

#[derive(IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ClientQueryDoc {
    /// 1..=100, default 20
    pub page_size: Option<u32>,
    /// 1-based, default 1
    pub page: Option<u32>,
    /// id, firstName, lastName, email, phone or createdAt
    pub sort_by: Option<String>,
    /// asc or desc
    pub direction: Option<String>,
    /// Case-insensitive match on name, email or phone
    pub q: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct VehicleInputDoc {
    pub client_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceModelDoc {
    pub service_id: i32,
    pub service_name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceInputDoc {
    pub service_name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StatusModelDoc { pub status_id: i32, pub status_name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LineItemDoc {
    pub service_id: i32,
    /// Booked price; may differ from the catalog price
    pub price: f64,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateAppointmentDoc {
    pub vehicle_id: i32,
    pub status_id: i32,
    pub notes: String,
    /// At least one entry, no duplicate service ids
    pub services: Vec<LineItemDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StatusChangeDoc { pub status_id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::get,
        crate::routes::clients::update,
        crate::routes::vehicles::list_by_client,
        crate::routes::vehicles::create,
        crate::routes::vehicles::get,
        crate::routes::vehicles::update,
        crate::routes::vehicles::details,
        crate::routes::catalog::list,
        crate::routes::catalog::create,
        crate::routes::statuses::list,
        crate::routes::appointments::create,
        crate::routes::appointments::get,
        crate::routes::appointments::list_by_vehicle,
        crate::routes::appointments::update_status,
    ),
    components(
        schemas(
            HealthResponse,
            CreatedDoc,
            ClientInputDoc,
            VehicleInputDoc,
            ServiceModelDoc,
            ServiceInputDoc,
            StatusModelDoc,
            LineItemDoc,
            CreateAppointmentDoc,
            StatusChangeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "vehicles"),
        (name = "services"),
        (name = "statuses"),
        (name = "appointments")
    )
)]
pub struct ApiDoc;
