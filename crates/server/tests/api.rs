use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{build_router, AppState};

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(build_router(AppState::new(db), CorsLayer::very_permissive()))
}

struct TestApp {
    base_url: String,
    http: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.http.post(self.url(path)).json(&body).send().await?;
        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.http.get(self.url(path)).send().await?;
        let status = res.status();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn create(&self, path: &str, body: Value) -> anyhow::Result<i64> {
        let (status, body) = self.post(path, body).await?;
        assert_eq!(status, HttpStatusCode::CREATED, "POST {} -> {}", path, body);
        Ok(body["id"].as_i64().unwrap())
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = build_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), http: reqwest::Client::new() })
}

fn client_body(first: &str, last: &str) -> Value {
    json!({ "firstName": first, "lastName": last, "phone": "555-0100", "email": format!("{}@example.com", first.to_lowercase()) })
}

#[tokio::test]
async fn health_and_openapi_via_oneshot() -> anyhow::Result<()> {
    let app = build_app().await?;
    let res = app.clone().oneshot(Request::builder().uri("/health").body(Body::empty())?).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty())?).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let doc: Value = serde_json::from_slice(&bytes)?;
    assert!(doc["paths"]["/api/appointments"].is_object());
    Ok(())
}

#[tokio::test]
async fn client_listing_pages_sorts_and_searches() -> anyhow::Result<()> {
    let app = start_server().await?;
    for (first, last) in [("Ada", "Lovelace"), ("Grace", "Hopper"), ("Alan", "Turing")] {
        app.create("/api/clients", client_body(first, last)).await?;
    }

    let (status, page) = app.get("/api/clients?pageSize=2&page=1&sortBy=lastName&direction=asc").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(page["total"], 3);
    assert_eq!(page["totalPages"], 2);
    let names: Vec<&str> = page["items"].as_array().unwrap().iter().map(|c| c["lastName"].as_str().unwrap()).collect();
    assert_eq!(names, ["Hopper", "Lovelace"]);

    let (_, found) = app.get("/api/clients?q=GRACE").await?;
    assert_eq!(found["total"], 1);
    assert_eq!(found["items"][0]["firstName"], "Grace");

    let (_, none) = app.get("/api/clients?q=nobody").await?;
    assert_eq!(none["total"], 0);
    assert_eq!(none["items"], json!([]));
    Ok(())
}

#[tokio::test]
async fn client_validation_and_missing_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.post("/api/clients", json!({ "firstName": "", "lastName": "Doe", "phone": "555-0100" })).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, _) = app.get("/api/clients/404").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);

    let res = app.http.put(app.url("/api/clients/404")).json(&client_body("Ghost", "Writer")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let id = app.create("/api/clients", client_body("Jane", "Doe")).await?;
    let res = app.http.put(app.url(&format!("/api/clients/{}", id))).json(&client_body("Janet", "Doe")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let (_, got) = app.get(&format!("/api/clients/{}", id)).await?;
    assert_eq!(got["firstName"], "Janet");
    Ok(())
}

#[tokio::test]
async fn appointment_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client_id = app.create("/api/clients", client_body("Jane", "Doe")).await?;
    let vehicle_id = app
        .create("/api/vehicles", json!({ "clientId": client_id, "year": 2012, "make": "Honda", "model": "Civic" }))
        .await?;
    let oil = app.create("/api/services", json!({ "serviceName": "Oil Change", "price": 29.99 })).await?;
    app.create("/api/services", json!({ "serviceName": "Smog Check", "price": 49.5 })).await?;

    let (_, services) = app.get("/api/services").await?;
    assert_eq!(services[0]["serviceName"], "Oil Change");
    assert_eq!(services[1]["price"], 49.5);

    let (_, statuses) = app.get("/api/statuses").await?;
    assert_eq!(statuses.as_array().unwrap().len(), 4);
    assert_eq!(statuses[0], json!({ "statusId": 1, "statusName": "Scheduled" }));

    let (status, body) = app
        .post("/api/appointments", json!({ "vehicleId": vehicle_id, "statusId": 1, "notes": "", "services": [] }))
        .await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST, "{}", body);

    let id = app
        .create(
            "/api/appointments",
            json!({ "vehicleId": vehicle_id, "statusId": 1, "notes": "noisy brakes", "services": [{ "serviceId": oil, "price": 29.99 }] }),
        )
        .await?;

    let (status, appt) = app.get(&format!("/api/appointments/{}", id)).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(appt["statusName"], "Scheduled");
    assert_eq!(appt["total"], 29.99);
    assert_eq!(appt["services"][0]["serviceName"], "Oil Change");

    let res = app
        .http
        .put(app.url(&format!("/api/appointments/{}/status", id)))
        .json(&json!({ "statusId": 3 }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let (_, history) = app.get(&format!("/api/vehicles/{}/appointments", vehicle_id)).await?;
    assert_eq!(history[0]["statusName"], "Completed");

    let (status, header) = app.get(&format!("/api/vehicles/{}/details", vehicle_id)).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(header["firstName"], "Jane");
    assert_eq!(header["make"], "Honda");
    let (status, _) = app.get("/api/vehicles/999/details").await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/api/appointments", json!({ "vehicleId": 999, "statusId": 1, "services": [{ "serviceId": oil, "price": 1 }] }))
        .await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn prices_round_half_away_from_zero_to_cents() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client_id = app.create("/api/clients", client_body("Jane", "Doe")).await?;
    let vehicle_id = app
        .create("/api/vehicles", json!({ "clientId": client_id, "year": 2015, "make": "Toyota", "model": "Corolla" }))
        .await?;
    let smog = app.create("/api/services", json!({ "serviceName": "Smog Check", "price": 49.995 })).await?;
    let (_, services) = app.get("/api/services").await?;
    assert_eq!(services[0]["price"], 50.0);

    let id = app
        .create(
            "/api/appointments",
            json!({ "vehicleId": vehicle_id, "statusId": 1, "services": [{ "serviceId": smog, "price": 29.999 }] }),
        )
        .await?;
    let (_, appt) = app.get(&format!("/api/appointments/{}", id)).await?;
    // numbers, not strings
    assert!(appt["services"][0]["price"].is_number());
    assert_eq!(appt["services"][0]["price"], 30.0);
    assert_eq!(appt["total"], 30.0);
    Ok(())
}
