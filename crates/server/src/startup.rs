use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_with_format;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {}", server.host, server.port, e)))
}

/// Connect, migrate if configured, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }
    Ok(routes::build_router(AppState::new(db), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    init_logging_with_format(&cfg.logging.format);

    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut server = ServerConfig::default();
        assert_eq!(bind_addr(&server).unwrap().port(), server.port);
        server.host = "not a host".into();
        assert!(matches!(bind_addr(&server), Err(StartupError::InvalidConfig(_))));
    }
}
