//! Calculator MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing a
//! small set of named, schema-validated tools over JSON-RPC 2.0.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool registry, argument validation, and the dispatch
//!     pipeline that routes calls and normalizes failures
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
