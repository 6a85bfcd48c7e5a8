use axum::{extract::State, Json};
use service::status::StatusModel;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/statuses", tag = "statuses",
    responses((status = 200, description = "All statuses ordered by id", body = [crate::openapi::StatusModelDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StatusModel>>, JsonApiError> {
    Ok(Json(state.statuses.get_all().await?))
}
