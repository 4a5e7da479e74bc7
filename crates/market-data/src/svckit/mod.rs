//! Service Kit - Agent Tools
//!
//! Market data tools that implement `agent_core::Tool`. Each one maps a typed
//! input onto a single API endpoint and reshapes the response.

pub mod metrics_history;
pub mod metrics_snapshot;
pub mod price_history;
pub mod price_snapshot;

pub use metrics_history::MetricsHistoryTool;
pub use metrics_snapshot::MetricsSnapshotTool;
pub use price_history::PriceHistoryTool;
pub use price_snapshot::PriceSnapshotTool;
