//! Mock API Client
//!
//! For testing and demo purposes. Serves canned bodies per endpoint and
//! records every URL it was asked for.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{build_url, ApiClient, ApiResponse, QueryParams};
use crate::config::FmpConfig;
use crate::error::{MarketDataError, Result};

#[derive(Clone, Debug)]
enum MockResponse {
    Json(serde_json::Value),
    Raw(String),
    Status(u16),
}

/// Mock client with static responses keyed by endpoint path
pub struct MockApiClient {
    config: FmpConfig,
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::with_config(FmpConfig::new("test-key"))
    }

    pub fn with_config(config: FmpConfig) -> Self {
        Self {
            config,
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer `endpoint` with a JSON body
    pub fn with_json(mut self, endpoint: impl Into<String>, body: serde_json::Value) -> Self {
        self.responses.insert(endpoint.into(), MockResponse::Json(body));
        self
    }

    /// Answer `endpoint` with a raw (possibly invalid) body
    pub fn with_body(mut self, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(endpoint.into(), MockResponse::Raw(body.into()));
        self
    }

    /// Answer `endpoint` with an error status
    pub fn with_status(mut self, endpoint: impl Into<String>, status: u16) -> Self {
        self.responses.insert(endpoint.into(), MockResponse::Status(status));
        self
    }

    /// URLs requested so far, oldest first
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn failure(status: u16) -> MarketDataError {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        MarketDataError::Request { status, status_text }
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn call(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse> {
        let url = build_url(&self.config.base_url, endpoint, params, self.config.api_key())?.to_string();

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());

        let data = match self.responses.get(endpoint) {
            Some(MockResponse::Json(body)) => body.clone(),
            Some(MockResponse::Raw(body)) => {
                serde_json::from_str(body).map_err(|e| MarketDataError::Decode(e.to_string()))?
            }
            Some(MockResponse::Status(status)) => return Err(Self::failure(*status)),
            None => return Err(Self::failure(404)),
        };

        Ok(ApiResponse { data, url })
    }

    fn name(&self) -> &str {
        "MockApi"
    }
}
