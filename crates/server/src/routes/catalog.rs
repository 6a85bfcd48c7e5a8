use axum::{extract::State, http::StatusCode, Json};
use service::catalog::{NewService, ServiceModel};

use super::Created;
use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    responses((status = 200, description = "Full catalog ordered by name", body = [crate::openapi::ServiceModelDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceModel>>, JsonApiError> {
    Ok(Json(state.catalog.get_all().await?))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewService>) -> Result<(StatusCode, Json<Created>), JsonApiError> {
    let id = state.catalog.add(input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}
