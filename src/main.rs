//! Book Catalog Server
//!
//! Serves the book catalog REST API.

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_catalog_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{BookStore, Repository},
    services::{bootstrap, DbReadiness, Services, StaticDataset},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Book Catalog Server v{}", env!("CARGO_PKG_VERSION"));

    // Static dataset, read once and never modified
    let dataset = StaticDataset::load(&config.dataset.path).await?;

    // The pool connects on first use so the server can listen before the
    // database is reachable; the readiness gate answers 503 meanwhile.
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_lazy(&config.database.url)?;

    let repository = Repository::new(pool);
    let store: Arc<dyn BookStore> = Arc::new(repository.books);

    let readiness = DbReadiness::new();
    bootstrap::spawn(
        store.clone(),
        readiness.clone(),
        Duration::from_secs(config.database.health_check_interval_secs.max(1)),
    );

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(store, dataset)),
        readiness,
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("book_catalog_server={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
