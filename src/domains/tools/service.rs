//! Tool service implementation.
//!
//! The ToolService is the dispatch pipeline for tool calls: it resolves
//! the requested name against the registry, validates the raw arguments
//! against the tool's input schema, and only then executes the handler.
//! Every failure is normalized into the closed [`ToolError`] taxonomy
//! exactly once, at this boundary.
//!
//! Calls are independent: the service holds no mutable state beyond the
//! shared read-only registry, so concurrent calls need no locking.
//! Nothing is retried; every failure is terminal for that single call.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{error, info, warn};

use super::error::ToolError;
use super::registry::ToolRegistry;
use super::validation::validate_arguments;
use crate::core::config::ToolsConfig;

/// Message handed to callers when a handler fails unexpectedly. The
/// original failure goes to the logs, never to the caller directly.
const EXECUTION_FAILED: &str = "Tool execution failed";

/// Service dispatching tool calls against an immutable registry.
pub struct ToolService {
    registry: Arc<ToolRegistry>,
    call_timeout: Duration,
}

impl ToolService {
    /// Create a new ToolService over the given registry.
    pub fn new(registry: Arc<ToolRegistry>, config: &ToolsConfig) -> Self {
        info!(tools = registry.len(), "Initializing ToolService");
        Self {
            registry,
            call_timeout: Duration::from_secs(config.call_timeout_secs),
        }
    }

    /// List all available tools, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list()
    }

    /// Dispatch a tool call.
    ///
    /// Absent arguments are treated as an empty argument object. The
    /// handler is never invoked when lookup or validation fails. The
    /// outcome is always exactly one result or exactly one [`ToolError`].
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self
            .registry
            .find(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        if let Err(issues) = validate_arguments(tool.input_schema(), &arguments) {
            warn!(tool = name, issues = issues.len(), "Rejecting invalid arguments");
            return Err(ToolError::from_issues(name, issues));
        }

        // Panics are contained here, once, so a misbehaving handler takes
        // down a single call rather than the connection. The timeout is
        // the cancellation policy for handlers that never settle; the
        // execution future is dropped at expiry.
        let execution = AssertUnwindSafe(tool.call(arguments)).catch_unwind();
        let outcome = match tokio::time::timeout(self.call_timeout, execution).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(panic)) => {
                let detail = panic_message(panic);
                error!(tool = name, detail = %detail, "Tool handler panicked");
                return Err(ToolError::internal_with_detail(EXECUTION_FAILED, detail));
            }
            Err(_) => {
                warn!(tool = name, timeout_secs = self.call_timeout.as_secs(), "Tool call timed out");
                return Err(ToolError::internal(format!(
                    "Tool '{name}' did not complete within {}s",
                    self.call_timeout.as_secs()
                )));
            }
        };

        match outcome {
            Ok(result) => Ok(result),
            // A failure already expressed in the taxonomy passes through
            // unchanged; anything else is logged for the operator and
            // re-wrapped with a generic caller-facing message.
            Err(err) => match err.downcast::<ToolError>() {
                Ok(tool_err) => Err(tool_err),
                Err(other) => {
                    let detail = format!("{other:#}");
                    error!(tool = name, detail = %detail, "Tool execution failed");
                    Err(ToolError::internal_with_detail(EXECUTION_FAILED, detail))
                }
            },
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
