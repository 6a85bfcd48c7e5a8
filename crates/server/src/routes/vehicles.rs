use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::vehicle::{NewVehicle, Vehicle, VehicleDetails};

use super::Created;
use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/clients/{id}/vehicles", tag = "vehicles",
    params(("id" = i32, Path, description = "Client ID")),
    responses((status = 200, description = "Vehicles of the client"), (status = 404, description = "Unknown client"))
)]
pub async fn list_by_client(State(state): State<AppState>, Path(client_id): Path<i32>) -> Result<Json<Vec<Vehicle>>, JsonApiError> {
    if state.clients.find(client_id).await?.is_none() {
        return Err(JsonApiError::not_found("client"));
    }
    Ok(Json(state.vehicles.list_by_client(client_id).await?))
}

#[utoipa::path(
    post, path = "/api/vehicles", tag = "vehicles",
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Unknown client")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewVehicle>) -> Result<(StatusCode, Json<Created>), JsonApiError> {
    let id = state.vehicles.add(input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    get, path = "/api/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vehicle>, JsonApiError> {
    state.vehicles.find(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("vehicle"))
}

#[utoipa::path(
    put, path = "/api/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i32>, Json(input): Json<NewVehicle>) -> Result<Json<Vehicle>, JsonApiError> {
    if !state.vehicles.update(Vehicle::from_input(id, input)).await? {
        return Err(JsonApiError::not_found("vehicle"));
    }
    state.vehicles.find(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("vehicle"))
}

/// Header data for the appointment composer: vehicle plus owner name.
#[utoipa::path(
    get, path = "/api/vehicles/{id}/details", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses((status = 200, description = "Vehicle with owner"), (status = 404, description = "Not Found"))
)]
pub async fn details(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<VehicleDetails>, JsonApiError> {
    state.vehicles.find_details(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("vehicle"))
}
