mod config;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use neighborly_api::state::{AppState, AppStateInner};
use neighborly_classifier::ZeroShotClassifier;
use neighborly_db::ExchangeStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neighborly=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = match &config.seed_path {
        Some(path) => ExchangeStore::open(path)?,
        None => ExchangeStore::demo(),
    };

    let classifier = ZeroShotClassifier::new(config.classifier.clone())?;
    if classifier.has_token() {
        info!("Skill classifier enabled at {}", classifier.url());
    } else {
        warn!("HF_TOKEN not set; skill analysis will use keyword matching only");
    }

    let state: AppState = Arc::new(AppStateInner { store, classifier });

    let app = neighborly_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Neighborly server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
