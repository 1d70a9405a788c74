//! LiveChat server binary — the process entry point.
//!
//! Loads configuration, initializes structured logging, establishes the
//! MongoDB connection, and runs until SIGTERM/SIGINT.

mod config;

use livechat_db::{DbError, DbHandle};
use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("LIVECHAT_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

/// Resolves the database section into settings and performs the single
/// connect attempt.
async fn connect_database(database: &config::DatabaseConfig) -> Result<DbHandle, DbError> {
    let settings = database.to_db_settings()?;
    livechat_db::connect(&settings).await
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration — the server cannot start without valid config");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Establish the database connection. The handle is owned here for the
    // life of the process; whether a failed attempt is fatal is a config
    // decision, not the library's.
    let _db = match connect_database(&config.database).await {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to MongoDB");
            if config.database.required {
                tracing::error!("database.required is set, aborting startup");
                std::process::exit(1);
            }
            tracing::warn!("continuing without a database connection");
            None
        }
    };

    tracing::info!("livechat server started");

    shutdown_signal().await;

    tracing::info!("livechat server shut down");
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
