//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server:
//! the registry of available tools, argument validation, and the dispatch
//! pipeline that routes a call to its handler and normalizes failures.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool definitions and the immutable registry
//! - `validation.rs` - Schema-driven argument validation
//! - `service.rs` - The dispatcher (list and call pipeline)
//! - `error.rs` - The closed tool error taxonomy

pub mod definitions;
mod error;
mod registry;
mod service;
mod validation;

pub use error::ToolError;
pub use registry::{ToolDefinition, ToolHandler, ToolRegistry};
pub use service::ToolService;
pub use validation::{ValidationIssue, validate_arguments};
