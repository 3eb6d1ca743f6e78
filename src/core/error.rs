//! Error types and handling for the MCP server.
//!
//! Runtime tool failures stay inside the tools domain as
//! [`ToolError`](crate::domains::tools::ToolError) and are translated to
//! wire errors at the server boundary. This type covers what is left:
//! startup failures that should stop the process.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Startup error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors, including invalid tool registration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_problem() {
        let err = Error::config("duplicate tool name: calculator_add");
        assert_eq!(
            err.to_string(),
            "Configuration error: duplicate tool name: calculator_add"
        );
    }
}
