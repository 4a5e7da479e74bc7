//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Tool execution failed
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// A remote service a tool depends on failed or answered with an error status
    #[error("Upstream error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgentError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            AgentError::Upstream { status: None, .. } => true,
            AgentError::Upstream { status: Some(code), .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AgentError::ToolNotFound(name) => format!("The tool '{}' is not available.", name),
            AgentError::ToolValidation(msg) => format!("Invalid tool input: {}", msg),
            AgentError::ToolExecution(msg) => format!("Tool error: {}", msg),
            AgentError::Upstream { status: Some(code), .. } => {
                format!("The data service answered with status {}.", code)
            }
            AgentError::Upstream { status: None, .. } => {
                "The data service is currently unreachable. Please try again.".into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        let unreachable = AgentError::Upstream { status: None, message: "refused".into() };
        let throttled = AgentError::Upstream { status: Some(429), message: "slow down".into() };
        let missing = AgentError::Upstream { status: Some(404), message: "not found".into() };

        assert!(unreachable.is_retryable());
        assert!(throttled.is_retryable());
        assert!(!missing.is_retryable());
        assert!(!AgentError::ToolValidation("x".into()).is_retryable());
    }

    #[test]
    fn test_user_message() {
        let err = AgentError::Upstream { status: Some(404), message: "API request failed".into() };
        assert_eq!(err.user_message(), "The data service answered with status 404.");
        assert_eq!(
            AgentError::ToolNotFound("foo".into()).user_message(),
            "The tool 'foo' is not available."
        );
    }
}
