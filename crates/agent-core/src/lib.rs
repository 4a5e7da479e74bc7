//! # agent-core
//!
//! Provider-agnostic tool framework for LLM agents.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Agent binding                          │
//! │   (LLM loop, HTTP adapter, test harness - out of crate)  │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │ ToolCall
//!                  ┌──────────▼──────────┐
//!                  │    ToolRegistry     │  validate → execute
//!                  └──────────┬──────────┘
//!                             │ ToolResult { data, sources }
//!                  ┌──────────▼──────────┐
//!                  │   impl Tool for ..  │  (domain crates)
//!                  └─────────────────────┘
//! ```
//!
//! Domain crates implement [`Tool`] and register themselves; the binding only
//! ever sees schemas, calls and results.

pub mod error;
pub mod tool;

pub use error::{AgentError, Result};
pub use tool::{ParameterSchema, Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
