//! STDIO transport implementation.
//!
//! Serves the calculator tools over stdin/stdout - the default and
//! recommended MCP mode, used when a client launches the server as a
//! child process.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the calculator server over stdin/stdout until the client
    /// closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Calculator server ready on stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO session closed");
        Ok(())
    }
}
