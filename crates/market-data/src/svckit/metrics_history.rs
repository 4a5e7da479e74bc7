//! Financial Metrics History Tool
//!
//! Key metrics per reporting period (annual or quarterly).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};

use crate::api::{ApiClient, QueryParams};
use crate::error::Result;
use crate::model::{MetricsHistoryInput, ReportingPeriod, ToolOutput, DEFAULT_METRICS_LIMIT};

pub const NAME: &str = "get_financial_metrics";
pub const ENDPOINT: &str = "/key-metrics";

/// Tool for retrieving historical financial metrics
pub struct MetricsHistoryTool {
    api: Arc<dyn ApiClient>,
}

impl MetricsHistoryTool {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, input: &MetricsHistoryInput) -> Result<ToolOutput> {
        let params = QueryParams::new()
            .param("symbol", &input.ticker)
            .param("period", input.period.api_value())
            .param("limit", input.limit);
        let response = self.api.call(ENDPOINT, &params).await?;

        Ok(ToolOutput::new("financial_metrics", response.data, response.url))
    }
}

#[async_trait]
impl Tool for MetricsHistoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Retrieves historical financial metrics like P/E ratio, enterprise value, etc.".into(),
            parameters: vec![
                ParameterSchema::required_string("ticker", "The stock ticker symbol (e.g., 'AAPL' for Apple)."),
                ParameterSchema {
                    name: "period".into(),
                    param_type: "string".into(),
                    description: "The reporting period: 'annual', 'quarterly', or 'ttm'.".into(),
                    required: false,
                    default: Some(json!(ReportingPeriod::default().as_str())),
                    enum_values: Some(ReportingPeriod::ALL.iter().map(|p| json!(p.as_str())).collect()),
                },
                ParameterSchema {
                    name: "limit".into(),
                    param_type: "number".into(),
                    description: "Number of periods to retrieve.".into(),
                    required: false,
                    default: Some(json!(DEFAULT_METRICS_LIMIT)),
                    enum_values: None,
                },
            ],
            category: Some("fundamentals".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let input: MetricsHistoryInput = call.parse_arguments()?;
        let output = self.fetch(&input).await?;
        Ok(output.into_tool_result(NAME))
    }
}
