use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::appointment::{AppointmentDetails, CreateAppointmentRequest};
use tracing::info;

use super::Created;
use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status_id: i32,
}

#[utoipa::path(
    post, path = "/api/appointments", tag = "appointments",
    request_body = crate::openapi::CreateAppointmentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Unknown vehicle, status or service")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Created>), JsonApiError> {
    let vehicle_id = req.vehicle_id;
    let id = state.appointments.create(req).await?;
    info!(appointment_id = id, vehicle_id, "appointment created via api");
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    get, path = "/api/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<AppointmentDetails>, JsonApiError> {
    state.appointments.find(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("appointment"))
}

#[utoipa::path(
    get, path = "/api/vehicles/{id}/appointments", tag = "appointments",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses((status = 200, description = "Newest first"), (status = 404, description = "Unknown vehicle"))
)]
pub async fn list_by_vehicle(State(state): State<AppState>, Path(vehicle_id): Path<i32>) -> Result<Json<Vec<AppointmentDetails>>, JsonApiError> {
    if state.vehicles.find(vehicle_id).await?.is_none() {
        return Err(JsonApiError::not_found("vehicle"));
    }
    Ok(Json(state.appointments.list_by_vehicle(vehicle_id).await?))
}

#[utoipa::path(
    put, path = "/api/appointments/{id}/status", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = crate::openapi::StatusChangeDoc,
    responses((status = 204, description = "Updated"), (status = 404, description = "Unknown appointment or status"))
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(change): Json<StatusChange>,
) -> Result<StatusCode, JsonApiError> {
    if state.appointments.update_status(id, change.status_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("appointment"))
    }
}
