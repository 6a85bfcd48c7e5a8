use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod appointments;
pub mod catalog;
pub mod clients;
pub mod statuses;
pub mod vehicles;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Body returned by create endpoints.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Created {
    pub id: i32,
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/clients", get(clients::list).post(clients::create))
        .route("/api/clients/:id", get(clients::get).put(clients::update))
        .route("/api/clients/:id/vehicles", get(vehicles::list_by_client))
        .route("/api/vehicles", axum::routing::post(vehicles::create))
        .route("/api/vehicles/:id", get(vehicles::get).put(vehicles::update))
        .route("/api/vehicles/:id/details", get(vehicles::details))
        .route("/api/vehicles/:id/appointments", get(appointments::list_by_vehicle))
        .route("/api/services", get(catalog::list).post(catalog::create))
        .route("/api/statuses", get(statuses::list))
        .route("/api/appointments", axum::routing::post(appointments::create))
        .route("/api/appointments/:id", get(appointments::get))
        .route("/api/appointments/:id/status", put(appointments::update_status));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
