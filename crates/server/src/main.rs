use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viewfinder_core::{load_config, validate_config, PhotoBackend, PhotoProvider, UnsplashClient};

use viewfinder_server::api::create_router;
use viewfinder_server::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("VIEWFINDER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully (viewfinder {})", VERSION);
    info!(
        "Debounce interval: {}ms, page size: {}",
        config.search.debounce_ms, config.search.per_page
    );

    // Create photo provider if configured
    let provider: Option<Arc<dyn PhotoProvider>> = match &config.photos {
        Some(photos_config) => match photos_config.backend {
            PhotoBackend::Unsplash => {
                if let Some(unsplash_config) = &photos_config.unsplash {
                    info!("Initializing Unsplash client");
                    match UnsplashClient::new(unsplash_config.clone()) {
                        Ok(client) => Some(Arc::new(client)),
                        Err(e) => {
                            error!("Failed to initialize Unsplash client: {}", e);
                            None
                        }
                    }
                } else {
                    error!("Unsplash backend selected but no unsplash config provided");
                    None
                }
            }
        },
        None => {
            info!("No photo provider configured, search endpoints will return 503");
            None
        }
    };

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), provider));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
