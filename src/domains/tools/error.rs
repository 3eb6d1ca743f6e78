//! Tool-specific error types.
//!
//! The taxonomy is closed: every failure a caller can observe is one of
//! `NotFound`, `InvalidParams`, or `Internal`, mapped onto the standard
//! JSON-RPC error codes. Handlers that need to signal a user-facing
//! problem return `InvalidParams`; everything unexpected becomes
//! `Internal` at the dispatch boundary.

use rmcp::model::{ErrorCode, ErrorData};
use serde_json::json;
use thiserror::Error;

use super::validation::ValidationIssue;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found in the registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{message}")]
    InvalidParams {
        message: String,
        /// Full validation issue list, kept for callers that want more
        /// than the summarized message.
        issues: Vec<ValidationIssue>,
    },

    /// An internal error occurred while executing the tool.
    #[error("{message}")]
    Internal {
        message: String,
        /// Diagnostic detail. Only exposed to callers when the server
        /// runs with diagnostics enabled; always available to operators
        /// through the logs.
        detail: Option<String>,
    },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid params" error with a bare message.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Build an "invalid params" error from validation issues. The message
    /// summarizes the first issue together with its field path.
    pub fn from_issues(tool: &str, issues: Vec<ValidationIssue>) -> Self {
        let message = match issues.first() {
            Some(issue) => format!(
                "Invalid arguments for tool '{tool}': {}: {}",
                issue.path, issue.message
            ),
            None => format!("Invalid arguments for tool '{tool}'"),
        };
        Self::InvalidParams { message, issues }
    }

    /// Create a new "internal" error with no diagnostic detail.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: None,
        }
    }

    /// Create a new "internal" error carrying diagnostic detail.
    pub fn internal_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// The JSON-RPC error code this error maps to on the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::METHOD_NOT_FOUND,
            Self::InvalidParams { .. } => ErrorCode::INVALID_PARAMS,
            Self::Internal { .. } => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Convert to the rmcp wire error.
    ///
    /// `include_detail` is the production/non-production switch: internal
    /// diagnostic detail is attached only when it is set. Validation
    /// issues describe the caller's own input and are attached in both
    /// modes.
    pub fn to_error_data(&self, include_detail: bool) -> ErrorData {
        let data = match self {
            Self::NotFound(_) => None,
            Self::InvalidParams { issues, .. } if !issues.is_empty() => {
                Some(json!({ "issues": issues }))
            }
            Self::InvalidParams { .. } => None,
            Self::Internal { detail: Some(detail), .. } if include_detail => {
                Some(json!({ "detail": detail }))
            }
            Self::Internal { .. } => None,
        };

        ErrorData::new(self.code(), self.to_string(), data)
    }
}
