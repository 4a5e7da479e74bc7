//! Financial Data API
//!
//! The query invoker: turns an endpoint path plus [`QueryParams`] into one
//! GET request and hands back the decoded JSON with the exact URL used.

mod fmp;
mod mock;
mod query;

pub use fmp::FmpClient;
pub use mock::MockApiClient;
pub use query::{build_url, ParamValue, QueryParams, API_KEY_PARAM};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Decoded response body paired with the URL that produced it
#[derive(Clone, Debug, Serialize)]
pub struct ApiResponse {
    /// JSON body, shape owned by the remote service
    pub data: serde_json::Value,

    /// Fully resolved request URL, kept for citation
    pub url: String,
}

/// API client trait (Strategy pattern)
///
/// [`FmpClient`] talks to the real service; [`MockApiClient`] serves canned
/// bodies for tests and offline demos.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue one GET against `endpoint` with `params`
    async fn call(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse>;

    /// Client name
    fn name(&self) -> &str;
}
