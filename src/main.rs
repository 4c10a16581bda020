//! Megamind API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use megamind_api::infrastructure::driven_adapters::config::AppConfig;
use megamind_api::infrastructure::driven_adapters::database;
use megamind_api::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use megamind_api::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(
        prefix = config.api.normalized_prefix(),
        versions = ?config.api.versions,
        "Configuration loaded successfully"
    );

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!(host = %config.database.host, database = %config.database.database, "Database connection pool created");

    database::synchronize_schema(&pool, &config.database).await?;

    // Create repository and application state
    let user_repository = Arc::new(PostgresUserRepository::new(pool));
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = api_rest::router(AppState::new(config, user_repository));

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("API listen at {}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Plain or JSON (`LOG_FORMAT=json`) output, filtered by `RUST_LOG`
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "megamind_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
