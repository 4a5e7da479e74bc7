//! Price History Tool
//!
//! Daily end-of-day prices over a date range.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use crate::api::{ApiClient, QueryParams};
use crate::error::Result;
use crate::model::{historical_or_self, PriceHistoryInput, ToolOutput};

pub const NAME: &str = "get_prices";
pub const ENDPOINT: &str = "/historical-price-eod/full";

/// Tool for retrieving historical daily prices
pub struct PriceHistoryTool {
    api: Arc<dyn ApiClient>,
}

impl PriceHistoryTool {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, input: &PriceHistoryInput) -> Result<ToolOutput> {
        let params = QueryParams::new()
            .param("symbol", &input.ticker)
            .param("from", &input.start_date)
            .param("to", &input.end_date);
        let response = self.api.call(ENDPOINT, &params).await?;

        Ok(ToolOutput::new("prices", historical_or_self(response.data), response.url))
    }
}

#[async_trait]
impl Tool for PriceHistoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Retrieves historical daily price data for a stock over a date range, including OHLC prices and volume.".into(),
            parameters: vec![
                ParameterSchema::required_string("ticker", "The stock ticker symbol (e.g., 'AAPL' for Apple)."),
                ParameterSchema::required_string("start_date", "Start date in YYYY-MM-DD format."),
                ParameterSchema::required_string("end_date", "End date in YYYY-MM-DD format."),
            ],
            category: Some("market_data".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let input: PriceHistoryInput = call.parse_arguments()?;
        let output = self.fetch(&input).await?;
        Ok(output.into_tool_result(NAME))
    }
}
