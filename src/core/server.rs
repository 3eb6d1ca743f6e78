//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain service.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per
//! tool. At startup every definition is registered into an immutable
//! [`ToolRegistry`](crate::domains::tools::ToolRegistry), and the
//! [`ToolService`] dispatcher is handed a shared reference to it. The
//! protocol methods below translate between rmcp request/response types
//! and the dispatcher; they add no behavior of their own beyond error
//! detail sanitization.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolRegistry, ToolService, definitions};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool protocol messages to the tools domain.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service dispatching tool calls.
    tool_service: Arc<ToolService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when tool registration is invalid (duplicate or empty tool
    /// names); that is a startup error, not a runtime condition.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);

        let registry = Arc::new(ToolRegistry::register(definitions::all())?);
        let tool_service = Arc::new(ToolService::new(registry, &config.tools));

        Ok(Self {
            config,
            tool_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool dispatch service.
    pub fn tool_service(&self) -> &ToolService {
        &self.tool_service
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes calculator tools. Call 'calculator_add' to add two numbers."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        let tools = self.tool_service.list_tools();
        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.tool_service
            .call_tool(&request.name, request.arguments)
            .await
            .map_err(|e| e.to_error_data(self.config.tools.environment.detail_enabled()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::CalculatorAddTool;
    use serde_json::json;

    #[test]
    fn server_starts_with_registered_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.tool_service().list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), CalculatorAddTool::NAME);
    }

    #[tokio::test]
    async fn dispatches_calculator_add() {
        let server = McpServer::new(Config::default()).unwrap();
        let args = json!({ "a": 5, "b": 3 }).as_object().unwrap().clone();
        let result = server
            .tool_service()
            .call_tool(CalculatorAddTool::NAME, Some(args))
            .await
            .unwrap();

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "5 + 3 = 8");
    }
}
