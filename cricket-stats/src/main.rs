//! cricket-stats - HTTP service for cricket player and match statistics
//!
//! Serves player, match and score queries from a pre-existing SQLite store.
//! On SIGINT/SIGTERM the listener stops, the store connection is closed and
//! the process exits with status 0. In-flight requests are not drained.

use std::future::IntoFuture;

use anyhow::{Context, Result};
use clap::Parser;
use cricket_common::config::{locate_config_file, ServiceConfig, TomlConfig};
use cricket_stats::cli::Args;
use cricket_stats::{build_router, db, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is resolved before tracing so the configured level applies
    let config_path = locate_config_file(args.config.as_deref());
    let toml_config = match &config_path {
        Some(path) => TomlConfig::load(path)?,
        None => TomlConfig::default(),
    };
    let config = ServiceConfig::resolve(args.overrides(), toml_config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cricket_stats={0},cricket_common={0},tower_http={0}", config.log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting cricket-stats v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_path, &args.config) {
        (Some(path), _) => info!("Loaded config from {}", path.display()),
        (None, Some(requested)) => warn!(
            "Config file {} not found, using defaults",
            requested.display()
        ),
        (None, None) => info!("No config file found, using defaults"),
    }

    info!("Database path: {}", config.database_path.display());
    let pool = match db::connect(&config.database_path).await {
        Ok(pool) => {
            info!("Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {:#}", e);
            return Err(e);
        }
    };

    let app = build_router(AppState::new(pool.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    info!("Server is running on http://{}", config.bind_address());

    // Dropping the server future stops accepting; open requests are not awaited
    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result.context("Server error")?;
        }
        _ = shutdown_signal() => {}
    }

    db::close(&pool).await;
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
