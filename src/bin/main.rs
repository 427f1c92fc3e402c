use mindful_triage::{ProcessOutcome, TriageConfig, TriageEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let message = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if message.trim().is_empty() {
        eprintln!("usage: triage <message>");
        std::process::exit(2);
    }

    let config = TriageConfig::from_env();
    let engine = TriageEngine::from_config(&config);

    info!("Mindful Triage running one-shot analysis");

    let analysis = engine.analyze(&message)?;

    println!("\n=== ANALYSIS ===");
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    match engine.process(&message, "cli", None)? {
        ProcessOutcome::Completed(result) => {
            println!("\n=== RESPONSE ===");
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        ProcessOutcome::Fallback { result, fault } => {
            eprintln!("Processing failed (fault id {}): {}", fault.fault_id, fault.message);
            println!("\n=== FALLBACK RESPONSE ===");
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}
