//! HTTP Handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use agent_core::{AgentError, ToolCall, ToolResult, ToolSchema};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tools: usize,
    pub api_key_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub retryable: bool,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: state.tools.len(),
        api_key_configured: state.api_key_configured,
    })
}

/// Schemas of every registered tool
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

/// Markdown description of the tools, ready to paste into a system prompt
pub async fn tools_prompt(State(state): State<AppState>) -> String {
    state.tools.generate_prompt_section()
}

/// Invoke a tool by name with a JSON object of arguments
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(arguments): Json<HashMap<String, serde_json::Value>>,
) -> Result<Json<ToolResult>, ApiError> {
    let mut call = ToolCall::new(name).with_id(uuid::Uuid::new_v4().to_string());
    call.arguments = arguments;

    let result = state.tools.execute(&call).await.map_err(|e| {
        tracing::warn!(tool = %call.name, id = ?call.id, "tool call failed: {}", e);
        error_response(&e)
    })?;

    Ok(Json(result))
}

fn error_response(err: &AgentError) -> ApiError {
    let (status, code) = match err {
        AgentError::ToolNotFound(_) => (StatusCode::NOT_FOUND, "TOOL_NOT_FOUND"),
        AgentError::ToolValidation(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENTS"),
        AgentError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "TOOL_ERROR"),
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
            retryable: err.is_retryable(),
        }),
    )
}
