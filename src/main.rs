use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use mergington_activities::config::ServerConfig;
use mergington_activities::logging;
use mergington_activities::services::activities_service::CapacityPolicy;
use mergington_activities::state::AppState;
use mergington_activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::seeded(CapacityPolicy::from_enforce_flag(config.enforce_capacity));
    let app = web::router(state, &config.static_dir);

    let listener = match bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("could not bind server: {}", e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!(
            static_dir = %config.static_dir.display(),
            enforce_capacity = config.enforce_capacity,
            "listening on http://{}",
            addr
        ),
        Err(e) => warn!("listening on unknown address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}

// Binds HOST:PORT, falling back to PORT + 1 once if that is taken.
async fn bind(config: &ServerConfig) -> Result<TcpListener, Box<dyn std::error::Error>> {
    let addr = config.socket_addr(config.port)?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let Some(fallback_port) = config.port.checked_add(1) else {
                return Err(e.into());
            };
            let fallback = config.socket_addr(fallback_port)?;
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            Ok(TcpListener::bind(fallback).await?)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
