//! # market-data
//!
//! Stock price and fundamentals tools for LLM agents, backed by the
//! Financial Modeling Prep REST API.
//!
//! ## Flow
//!
//! ```text
//! ToolCall { ticker: "AAPL", ... }
//!     │  parse + apply defaults
//!     ▼
//! PriceSnapshotTool / PriceHistoryTool / MetricsSnapshotTool / MetricsHistoryTool
//!     │  endpoint + QueryParams
//!     ▼
//! ApiClient::call ──▶ GET https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=…
//!     │  ApiResponse { data, url }
//!     ▼
//! ToolResult { data: { snapshot: … }, sources: [url] }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_core::ToolRegistry;
//! use market_data::{api::FmpClient, FmpConfig};
//!
//! let api = Arc::new(FmpClient::new(FmpConfig::new("my-key")));
//! let mut registry = ToolRegistry::new();
//! market_data::register_tools(&mut registry, api);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod svckit;

use std::sync::Arc;

use agent_core::ToolRegistry;

pub use api::{ApiClient, ApiResponse, ParamValue, QueryParams};
pub use config::FmpConfig;
pub use error::{MarketDataError, Result};
pub use model::{
    map_period, MetricsHistoryInput, PriceHistoryInput, ReportingPeriod, TickerInput, ToolOutput,
};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{
        MetricsHistoryTool, MetricsSnapshotTool, PriceHistoryTool, PriceSnapshotTool,
    };
}

/// Register every market data tool against one API client
pub fn register_tools(registry: &mut ToolRegistry, api: Arc<dyn ApiClient>) {
    registry.register(tools::PriceSnapshotTool::new(api.clone()));
    registry.register(tools::PriceHistoryTool::new(api.clone()));
    registry.register(tools::MetricsSnapshotTool::new(api.clone()));
    registry.register(tools::MetricsHistoryTool::new(api));
}
