use std::sync::Arc;

use scam_honeypot::api::honeypot_routes;
use scam_honeypot::config::HoneypotConfig;
use scam_honeypot::error::{ConfigError, Error, Result};
use scam_honeypot::session::SessionOrchestrator;
use scam_honeypot::store::{ConversationStore, InMemoryStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => {}
        Err(Error::Config(ConfigError::MissingEnvVar(var))) => {
            eprintln!("Error: {var} not set");
            eprintln!("  export {var}=<shared secret callers send as x-api-key>");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    let config = HoneypotConfig::from_env()?;

    eprintln!("🍯 Scam Honeypot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://{}/honeypot", config.bind_addr());
    eprintln!("   Health:   http://{}/health", config.bind_addr());

    // Conversations live only as long as this process.
    let store: Arc<dyn ConversationStore> = InMemoryStore::new();
    let orchestrator = SessionOrchestrator::new(store);
    let app = honeypot_routes(orchestrator, config.api_key.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| Error::Server(format!("failed to bind {}: {e}", config.bind_addr())))?;
    tracing::info!(addr = %config.bind_addr(), "Honeypot server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    Ok(())
}
