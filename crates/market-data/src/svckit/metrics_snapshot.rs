//! Financial Metrics Snapshot Tool
//!
//! Trailing-twelve-month key metrics: market cap, P/E, dividend yield, etc.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use crate::api::{ApiClient, QueryParams};
use crate::error::Result;
use crate::model::{first_or_self, TickerInput, ToolOutput};

pub const NAME: &str = "get_financial_metrics_snapshot";
pub const ENDPOINT: &str = "/key-metrics-ttm";

/// Tool for fetching current (TTM) financial metrics
pub struct MetricsSnapshotTool {
    api: Arc<dyn ApiClient>,
}

impl MetricsSnapshotTool {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, input: &TickerInput) -> Result<ToolOutput> {
        let params = QueryParams::new().param("symbol", &input.ticker);
        let response = self.api.call(ENDPOINT, &params).await?;

        Ok(ToolOutput::new("snapshot", first_or_self(response.data), response.url))
    }
}

#[async_trait]
impl Tool for MetricsSnapshotTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Fetches current financial metrics including market cap, P/E ratio, dividend yield, etc.".into(),
            parameters: vec![ParameterSchema::required_string(
                "ticker",
                "The stock ticker symbol (e.g., 'AAPL' for Apple).",
            )],
            category: Some("fundamentals".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let input: TickerInput = call.parse_arguments()?;
        let output = self.fetch(&input).await?;
        Ok(output.into_tool_result(NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_takes_first_row() {
        let api = Arc::new(MockApiClient::new().with_json(
            ENDPOINT,
            json!([{ "symbol": "NVDA", "marketCap": 3.1e12, "peRatioTTM": 52.3 }]),
        ));
        let tool = MetricsSnapshotTool::new(api.clone());

        let output = tool.fetch(&TickerInput::new("NVDA")).await.unwrap();

        assert_eq!(output.field("snapshot").and_then(|s| s.get("peRatioTTM")), Some(&json!(52.3)));
        assert!(api.requests()[0].contains("/key-metrics-ttm?symbol=NVDA&apikey="));
    }

    #[tokio::test]
    async fn test_empty_list_gives_null_snapshot() {
        let tool = MetricsSnapshotTool::new(Arc::new(MockApiClient::new().with_json(ENDPOINT, json!([]))));

        let output = tool.fetch(&TickerInput::new("ZZZZ")).await.unwrap();
        assert_eq!(output.field("snapshot"), Some(&serde_json::Value::Null));
    }

    #[tokio::test]
    async fn test_non_string_ticker_rejected() {
        let tool = MetricsSnapshotTool::new(Arc::new(MockApiClient::new()));

        let err = tool
            .execute(&ToolCall::new(NAME).arg("ticker", 42))
            .await
            .unwrap_err();
        assert!(matches!(err, agent_core::AgentError::ToolValidation(_)));
    }
}
