//! Tool Inputs and Outputs
//!
//! Typed input shapes for each tool, with defaults applied during
//! deserialization, and the payload shape handed back to the agent.

use std::fmt;
use std::str::FromStr;

use agent_core::ToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for tools that only need a ticker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerInput {
    /// Stock ticker symbol (e.g., "AAPL")
    pub ticker: String,
}

impl TickerInput {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self { ticker: ticker.into() }
    }
}

/// Input for the historical prices tool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistoryInput {
    pub ticker: String,

    /// Start date, YYYY-MM-DD
    pub start_date: String,

    /// End date, YYYY-MM-DD
    pub end_date: String,
}

/// Input for the historical financial metrics tool
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsHistoryInput {
    pub ticker: String,

    #[serde(default)]
    pub period: ReportingPeriod,

    /// Number of periods to retrieve; any JSON number is accepted and
    /// integral values are sent without a fraction (`4.0` becomes `limit=4`)
    #[serde(default = "default_limit")]
    pub limit: f64,
}

pub const DEFAULT_METRICS_LIMIT: f64 = 4.0;

fn default_limit() -> f64 {
    DEFAULT_METRICS_LIMIT
}

impl MetricsHistoryInput {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            period: ReportingPeriod::default(),
            limit: DEFAULT_METRICS_LIMIT,
        }
    }

    pub fn period(mut self, period: ReportingPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }
}

/// Reporting period accepted by the metrics history tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Annual,
    Quarterly,
    #[default]
    Ttm,
}

impl ReportingPeriod {
    pub const ALL: [ReportingPeriod; 3] = [Self::Annual, Self::Quarterly, Self::Ttm];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportingPeriod::Annual => "annual",
            ReportingPeriod::Quarterly => "quarterly",
            ReportingPeriod::Ttm => "ttm",
        }
    }

    /// Value the API expects for the `period` parameter
    pub fn api_value(self) -> &'static str {
        map_period(self.as_str())
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown reporting period '{s}'"))
    }
}

/// Map a reporting period name onto the API's `period` parameter.
///
/// Only `quarterly` selects quarterly data; everything else, `ttm` included,
/// falls back to `annual`.
pub fn map_period(period: &str) -> &'static str {
    if period == "quarterly" {
        "quarter"
    } else {
        "annual"
    }
}

/// First element of an array body, or the body itself when it is not an array.
///
/// An empty array yields `null`.
pub fn first_or_self(data: Value) -> Value {
    match data {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}

/// The `historical` field of an object body when present and non-null,
/// otherwise the body unchanged.
///
/// Only a missing or `null` field falls back to the body; `false`, `0` and
/// `""` are returned as the field value.
pub fn historical_or_self(mut data: Value) -> Value {
    if data.get("historical").is_some_and(|h| !h.is_null()) {
        return data["historical"].take();
    }
    data
}

/// Payload returned by a tool: `{ <field>: <result> }` plus its source URLs
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolOutput {
    pub data: Value,
    pub sources: Vec<String>,
}

impl ToolOutput {
    pub fn new(field: &str, result: Value, source: impl Into<String>) -> Self {
        let mut data = serde_json::Map::new();
        data.insert(field.to_string(), result);

        Self {
            data: Value::Object(data),
            sources: vec![source.into()],
        }
    }

    /// Named field of the payload
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn into_tool_result(self, tool_name: &str) -> ToolResult {
        ToolResult::formatted(tool_name, self.data, self.sources)
    }
}
