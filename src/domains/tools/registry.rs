//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry is built once at startup from the definitions in
//! `definitions/` and is read-only afterwards. Lookup is by name;
//! listing preserves registration order. Duplicate or empty tool names
//! are a programmer error and fail registration outright.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::core::error::{Error, Result};

/// A tool's execution handler.
///
/// Handlers run only after the dispatcher has validated the arguments
/// against the tool's input schema, so they can treat the argument shape
/// as trusted. A handler reports user-facing problems by returning a
/// [`ToolError`](super::ToolError); any other error is wrapped as an
/// internal failure at the dispatch boundary.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: JsonObject) -> anyhow::Result<CallToolResult>;
}

/// One registered tool: dispatch name, description, input schema, and
/// the handler that executes it.
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: Arc<JsonObject>,
    handler: Box<dyn ToolHandler>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Arc<JsonObject>,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &JsonObject {
        &self.input_schema
    }

    /// Create the Tool model for listing (metadata only, no handler).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub(crate) async fn call(&self, arguments: JsonObject) -> anyhow::Result<CallToolResult> {
        self.handler.call(arguments).await
    }
}

/// Registry of all available tools.
///
/// Constructed once at startup and never mutated; the dispatcher holds it
/// behind an `Arc` and concurrent calls share it without locking.
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Build a registry from tool definitions.
    ///
    /// Fails on empty or duplicate names. Both indicate a registration
    /// bug, and the process should refuse to start rather than shadow a
    /// tool silently.
    pub fn register(definitions: Vec<ToolDefinition>) -> Result<Self> {
        let mut tools: Vec<ToolDefinition> = Vec::with_capacity(definitions.len());

        for def in definitions {
            if def.name().is_empty() {
                return Err(Error::config("tool registered with an empty name"));
            }
            if tools.iter().any(|t| t.name() == def.name()) {
                return Err(Error::config(format!(
                    "duplicate tool name: {}",
                    def.name()
                )));
            }
            tools.push(def);
        }

        Ok(Self { tools })
    }

    /// Look up a tool definition by name.
    pub fn find(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// All tools as Tool models, in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }

    /// All registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NoopHandler;

    #[async_trait]
    impl ToolHandler for NoopHandler {
        async fn call(&self, _arguments: JsonObject) -> anyhow::Result<CallToolResult> {
            Ok(CallToolResult::success(vec![]))
        }
    }

    fn definition(name: &str) -> ToolDefinition {
        let schema = json!({ "type": "object", "properties": {} })
            .as_object()
            .unwrap()
            .clone();
        ToolDefinition::new(name, format!("{name} description"), Arc::new(schema), NoopHandler)
    }

    #[test]
    fn lists_in_registration_order() {
        let registry =
            ToolRegistry::register(vec![definition("beta"), definition("alpha")]).unwrap();
        let names: Vec<_> = registry.list().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn finds_registered_tool() {
        let registry = ToolRegistry::register(vec![definition("alpha")]).unwrap();
        assert!(registry.find("alpha").is_some());
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = ToolRegistry::register(vec![definition("alpha"), definition("alpha")]);
        match result {
            Err(err) => assert!(err.to_string().contains("duplicate")),
            Ok(_) => panic!("duplicate names must be rejected"),
        }
    }

    #[test]
    fn rejects_empty_name() {
        let result = ToolRegistry::register(vec![definition("")]);
        assert!(result.is_err());
    }

    #[test]
    fn listing_exposes_metadata_only() {
        let registry = ToolRegistry::register(vec![definition("alpha")]).unwrap();
        let tool = &registry.list()[0];
        assert_eq!(tool.name.as_ref(), "alpha");
        assert_eq!(tool.description.as_deref(), Some("alpha description"));
        assert!(tool.input_schema.contains_key("type"));
    }
}
