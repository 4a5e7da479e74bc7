//! Application State

use std::sync::Arc;

use agent_core::ToolRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Tool registry with all available tools
    pub tools: Arc<ToolRegistry>,

    /// Whether an API key was found at startup
    pub api_key_configured: bool,
}
