mod config;
mod db;
mod error;
mod handlers;
mod logger;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::{routing::{get, Router}};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use config::Config;
use db::{Database, UserStore};

// handlers only see the store, the connection itself
// is owned by main and handed in here
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>
}

pub fn router(state: AppState) -> Router {

    Router::new()
        .route("/api/users", get(handlers::list_users))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())

}

#[tokio::main]
async fn main() -> anyhow::Result<()> {

    dotenvy::dotenv().ok();
    logger::init();

    let config = Config::from_env()?;

    // the server starts listening whether or not this succeeds
    let database = Database::new();
    database.connect_in_background(config.database.connect_options());

    let state = AppState {
        users: Arc::new(database.clone())
    };

    let app = router(state);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let listener = TcpListener::bind(addr).await
        .with_context(|| format!("Failed to bind to port {}", config.port))?;
    info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!(database = ?database.status(), "Server shutdown complete");
    Ok(())

}

async fn shutdown_signal() {

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down")
    }

}
