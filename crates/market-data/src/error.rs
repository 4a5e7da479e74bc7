//! Error Types for Market Data

use agent_core::AgentError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketDataError>;

#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Base URL and endpoint path did not form a valid URL
    #[error("Invalid request URL: {0}")]
    Construction(String),

    /// The API answered with a non-success status
    #[error("API request failed: {status} {status_text}")]
    Request { status: u16, status_text: String },

    /// The response body was not valid JSON
    #[error("Invalid JSON in API response: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// HTTP status carried by the error, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            MarketDataError::Request { status, .. } => Some(*status),
            MarketDataError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<MarketDataError> for AgentError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::Request { status, .. } => AgentError::Upstream {
                status: Some(status),
                message: err.to_string(),
            },
            MarketDataError::Network(_) => AgentError::Upstream {
                status: err.status(),
                message: err.to_string(),
            },
            MarketDataError::Construction(_) | MarketDataError::Decode(_) => {
                AgentError::ToolExecution(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failure_message() {
        let err = MarketDataError::Request {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API request failed: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_into_agent_error() {
        let err: AgentError = MarketDataError::Request {
            status: 503,
            status_text: "Service Unavailable".into(),
        }
        .into();
        assert!(matches!(err, AgentError::Upstream { status: Some(503), .. }));
        assert!(err.is_retryable());

        let err: AgentError = MarketDataError::Decode("expected value".into()).into();
        assert!(matches!(err, AgentError::ToolExecution(_)));
    }
}
