//! Entry point: wires the session store and API client together and
//! serves the gateway's health endpoint.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use ecosistema_union::adapters::backend::UnionApi;
use ecosistema_union::adapters::http::health::{health_routes, HealthAppState};
use ecosistema_union::adapters::session::FileSessionStore;
use ecosistema_union::config::AppConfig;
use ecosistema_union::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        backend = %config.backend.base_url,
        environment = ?config.server.environment,
        "starting ecosistema-union gateway"
    );

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(config.session.path()));
    let api = Arc::new(UnionApi::new(&config.backend, session));

    let router = health_routes(HealthAppState { api }).layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install shutdown handler");
    }
}
