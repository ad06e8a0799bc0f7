use std::sync::Arc;

use config::{ApiConfig, LoggingConfig};
use llm_providers::LlmService;

#[tokio::main]
async fn main() {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    let handler: api::AppState = Arc::new(LlmService::new(&config.providers));
    let app = api::app(handler);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, address = %bind_address, "Failed to bind server address");
            std::process::exit(1);
        });

    tracing::info!(address = %bind_address, "Server started successfully");
    tracing::info!("API Endpoints:");
    tracing::info!("  - POST /api/plan (Travel plan generation)");
    tracing::info!("  - POST /api/recommend (Destination recommendations)");

    axum::serve(listener, app).await.unwrap();
}

fn init_tracing(logging_config: &LoggingConfig) {
    // Build the filter string from the logging configuration
    let mut filter = logging_config.level.clone();

    for (module, level) in &logging_config.modules {
        filter.push_str(&format!(",{module}={level}"));
    }

    // Initialize tracing based on the format specified in the configuration
    match logging_config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}
