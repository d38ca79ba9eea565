mod classify;
mod clients;
mod config;
mod db;
mod errors;
mod matcher;
mod metrics;
mod nlp;
mod pkd;
mod registry;
mod routes;
mod scrape;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use clients::translate::{HttpTranslator, NoopTranslator, Translator};
use registry::{EntityRegistry, MockRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    dotenvy::dotenv().ok();
    let config = config::AppConfig::build()?;

    // 2. Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.rust_log))
        .init();

    tracing::info!("Starting grantscope...");

    // 3. Initialize Database
    let repo = db::Repository::new(&config.database).await?;
    tracing::info!("Connected to database");

    // 4. Shared outbound HTTP client and external adapters
    let http = reqwest::Client::new();

    let translator: Arc<dyn Translator> = if config.translation.api_url == "mock" {
        Arc::new(NoopTranslator)
    } else {
        Arc::new(HttpTranslator::new(http.clone(), config.translation.clone()))
    };

    // Synthetic registry until a real lookup backend is wired in; the
    // orchestrator only sees the EntityRegistry seam.
    let registry: Arc<dyn EntityRegistry> = Arc::new(MockRegistry::new());

    // 5. Initialize App State (Services)
    let state = services::AppState::new(&config, repo.clone(), registry, translator, http);

    // 6. Corpus refresh: once now, then on the configured interval
    services::ingest::spawn_refresh_loop(
        state.ingest_service.clone(),
        Duration::from_secs(config.ingest.interval_secs),
    );

    // 7. Setup Router
    let app = routes::create_router(state, repo);

    // 8. Start Server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
