use mindful_triage::{api::start_server, TriageConfig, TriageEngine};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before the filter reads RUST_LOG
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TriageConfig::from_env();

    info!(
        port = config.port,
        resources_file = %config.resources_file.display(),
        seeded = config.seed.is_some(),
        "Mindful Triage API starting"
    );

    let engine = Arc::new(TriageEngine::from_config(&config));

    info!(
        resources = engine.lexicon().resources().len(),
        "Triage engine ready"
    );

    start_server(engine, config.port).await
}
