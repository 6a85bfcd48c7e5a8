use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service::client::{Client, ClientQuery, NewClient};
use service::pagination::PagedResult;
use tracing::info;

use super::Created;
use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/clients", tag = "clients",
    params(crate::openapi::ClientQueryDoc),
    responses(
        (status = 200, description = "One page of clients"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ClientQuery>) -> Result<Json<PagedResult<Client>>, JsonApiError> {
    let page = state.clients.get_clients(&q).await?;
    info!(total = page.total, page = page.page, "list clients");
    Ok(Json(page))
}

#[utoipa::path(
    post, path = "/api/clients", tag = "clients",
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewClient>) -> Result<(StatusCode, Json<Created>), JsonApiError> {
    let id = state.clients.add(input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    get, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Client>, JsonApiError> {
    state.clients.find(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("client"))
}

#[utoipa::path(
    put, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i32>, Json(input): Json<NewClient>) -> Result<Json<Client>, JsonApiError> {
    let client = Client::from_input(id, input);
    if !state.clients.update(client).await? {
        return Err(JsonApiError::not_found("client"));
    }
    state.clients.find(id).await?.map(Json).ok_or_else(|| JsonApiError::not_found("client"))
}
