//! Price Snapshot Tool
//!
//! Latest quote for a stock: price, volume, day OHLC.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use crate::api::{ApiClient, QueryParams};
use crate::error::Result;
use crate::model::{first_or_self, TickerInput, ToolOutput};

pub const NAME: &str = "get_price_snapshot";
pub const ENDPOINT: &str = "/quote";

/// Tool for fetching the most recent price snapshot
pub struct PriceSnapshotTool {
    api: Arc<dyn ApiClient>,
}

impl PriceSnapshotTool {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, input: &TickerInput) -> Result<ToolOutput> {
        let params = QueryParams::new().param("symbol", &input.ticker);
        let response = self.api.call(ENDPOINT, &params).await?;

        // The quote endpoint answers with a list; keep the first match
        Ok(ToolOutput::new("snapshot", first_or_self(response.data), response.url))
    }
}

#[async_trait]
impl Tool for PriceSnapshotTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Fetches the most recent price snapshot for a stock including latest price, volume, and OHLC data.".into(),
            parameters: vec![ParameterSchema::required_string(
                "ticker",
                "The stock ticker symbol (e.g., 'AAPL' for Apple).",
            )],
            category: Some("market_data".into()),
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
    use crate::error::MarketDataError;
    use serde_json::json;

    #[tokio::test]
    async fn test_takes_first_quote() {
        let api = Arc::new(MockApiClient::new().with_json(
            ENDPOINT,
            json!([
                { "symbol": "AAPL", "price": 187.44, "volume": 51_234_100 },
                { "symbol": "AAPL.NE", "price": 25.1 }
            ]),
        ));
        let tool = PriceSnapshotTool::new(api.clone());

        let output = tool.fetch(&TickerInput::new("AAPL")).await.unwrap();

        assert_eq!(output.field("snapshot"), Some(&json!({ "symbol": "AAPL", "price": 187.44, "volume": 51_234_100 })));
        assert_eq!(output.sources, api.requests());
        assert!(output.sources[0].ends_with("/quote?symbol=AAPL&apikey=test-key"));
    }

    #[tokio::test]
    async fn test_object_body_passes_through() {
        let body = json!({ "symbol": "AAPL", "price": 187.44 });
        let tool = PriceSnapshotTool::new(Arc::new(MockApiClient::new().with_json(ENDPOINT, body.clone())));

        let output = tool.fetch(&TickerInput::new("AAPL")).await.unwrap();
        assert_eq!(output.field("snapshot"), Some(&body));
    }

    #[tokio::test]
    async fn test_execute_formats_result() {
        let tool = PriceSnapshotTool::new(Arc::new(
            MockApiClient::new().with_json(ENDPOINT, json!([{ "symbol": "MSFT", "price": 415.1 }])),
        ));

        let result = tool
            .execute(&ToolCall::new(NAME).arg("ticker", "MSFT"))
            .await
            .unwrap();

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(parsed["data"]["snapshot"]["price"], 415.1);
        assert_eq!(parsed["sourceUrls"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_error_status_propagates() {
        let tool = PriceSnapshotTool::new(Arc::new(MockApiClient::new().with_status(ENDPOINT, 401)));

        let err = tool.fetch(&TickerInput::new("AAPL")).await.unwrap_err();
        assert!(matches!(err, MarketDataError::Request { status: 401, .. }));
    }
}
