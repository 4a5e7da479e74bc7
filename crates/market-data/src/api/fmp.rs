//! Financial Modeling Prep client

use async_trait::async_trait;

use super::{build_url, ApiClient, ApiResponse, QueryParams};
use crate::config::FmpConfig;
use crate::error::{MarketDataError, Result};

/// reqwest-backed client for the Financial Modeling Prep API
pub struct FmpClient {
    http: reqwest::Client,
    config: FmpConfig,
}

impl FmpClient {
    pub fn new(config: FmpConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing reqwest client (shared pool, custom timeouts)
    pub fn with_http_client(http: reqwest::Client, config: FmpConfig) -> Self {
        Self { http, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(FmpConfig::from_env())
    }

    pub fn config(&self) -> &FmpConfig {
        &self.config
    }
}

#[async_trait]
impl ApiClient for FmpClient {
    async fn call(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse> {
        let url = build_url(&self.config.base_url, endpoint, params, self.config.api_key())?;

        // The URL carries the key, so only the endpoint is logged
        tracing::debug!(endpoint, "GET financial data");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "financial data request failed");
            return Err(MarketDataError::Request {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(endpoint, error = %e, "financial data response was not JSON");
            MarketDataError::Decode(e.to_string())
        })?;

        tracing::debug!(endpoint, status = status.as_u16(), bytes = body.len(), "financial data received");

        Ok(ApiResponse {
            data,
            url: url.to_string(),
        })
    }

    fn name(&self) -> &str {
        "FinancialModelingPrep"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_config_defaults() {
        let client = FmpClient::new(FmpConfig::default());
        assert_eq!(client.config().base_url, DEFAULT_BASE_URL);
        assert_eq!(client.name(), "FinancialModelingPrep");
    }

    #[tokio::test]
    async fn test_bad_base_url_fails_before_network() {
        let client = FmpClient::new(FmpConfig::new("k").with_base_url("::nope"));
        let err = client.call("/quote", &QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, MarketDataError::Construction(_)));
    }
}
