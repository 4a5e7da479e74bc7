//! market-data HTTP Server
//!
//! Axum-based server that publishes the market data tools over REST so an
//! agent (or a human with curl) can discover and call them.

mod handlers;
mod state;


use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::ToolRegistry;
use market_data::{api::FmpClient, ApiClient};

use crate::handlers::{health_check, invoke_tool, list_tools, tools_prompt};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let client = FmpClient::from_env();
    let api_key_configured = client.config().has_api_key();

    if api_key_configured {
        tracing::info!("✓ {} API key configured", client.name());
    } else {
        tracing::warn!("⚠ FMP_API_KEY not set - requests will be sent with an empty key");
        tracing::warn!("  Set FMP_API_KEY in .env");
    }
    tracing::info!("  Base URL: {}", client.config().base_url);

    let api: Arc<dyn ApiClient> = Arc::new(client);

    // Initialize tools
    let mut tools = ToolRegistry::new();
    market_data::register_tools(&mut tools, api);

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    let state = AppState {
        tools: Arc::new(tools),
        api_key_configured,
    };

    let app = build_router(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 market-data server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health            - Health check");
    tracing::info!("  GET  /api/tools         - List tool schemas");
    tracing::info!("  GET  /api/tools/prompt  - Tool descriptions for a system prompt");
    tracing::info!("  POST /api/tools/{{name}}  - Invoke a tool");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/prompt", get(tools_prompt))
        .route("/api/tools/{name}", post(invoke_tool))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
