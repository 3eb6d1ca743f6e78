//! Calculator addition tool definition.
//!
//! Adds two numbers and renders the sum as text. The params schema bounds
//! each operand to [`MIN_OPERAND`, `MAX_OPERAND`]; the execute step still
//! has to post-check the sum, because two individually valid operands can
//! add up past the supported range.

use async_trait::async_trait;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::error::ToolError;
use super::super::registry::{ToolDefinition, ToolHandler};

/// Largest operand magnitude the tool accepts, and the bound its result
/// must stay within.
pub const MAX_OPERAND: f64 = 1e10;
/// Smallest operand value the tool accepts.
pub const MIN_OPERAND: f64 = -1e10;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the calculator addition tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CalculatorAddParams {
    /// First addend.
    #[schemars(range(min = MIN_OPERAND, max = MAX_OPERAND))]
    pub a: f64,

    /// Second addend.
    #[schemars(range(min = MIN_OPERAND, max = MAX_OPERAND))]
    pub b: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Addition tool - adds two bounded numbers.
pub struct CalculatorAddTool;

impl CalculatorAddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculator_add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add two numbers together. Accepts finite numbers between -1e10 and 1e10 and returns the sum as text.";

    /// Execute the tool logic over validated parameters.
    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &CalculatorAddParams) -> Result<CallToolResult, ToolError> {
        let sum = params.a + params.b;

        // Post-condition the validator cannot anticipate: the operands
        // were each in range, but their sum may not be.
        if !sum.is_finite() || sum.abs() > MAX_OPERAND {
            return Err(ToolError::invalid_params(format!(
                "Result overflows the supported range [{MIN_OPERAND}, {MAX_OPERAND}]"
            )));
        }

        info!("Computed sum: {sum}");

        Ok(CallToolResult::success(vec![Content::text(format!(
            "{} + {} = {sum}",
            params.a, params.b
        ))]))
    }

    /// Create the registry definition for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CalculatorAddParams>(),
            CalculatorAddHandler,
        )
    }
}

struct CalculatorAddHandler;

#[async_trait]
impl ToolHandler for CalculatorAddHandler {
    async fn call(&self, arguments: JsonObject) -> anyhow::Result<CallToolResult> {
        let params: CalculatorAddParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_params(e.to_string()))?;
        Ok(CalculatorAddTool::execute(&params)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn adds_integers() {
        let result = CalculatorAddTool::execute(&CalculatorAddParams { a: 5.0, b: 3.0 }).unwrap();
        assert_eq!(result_text(&result), "5 + 3 = 8");
    }

    #[test]
    fn adds_fractions() {
        let result = CalculatorAddTool::execute(&CalculatorAddParams { a: 1.5, b: 2.7 }).unwrap();
        assert_eq!(result_text(&result), "1.5 + 2.7 = 4.2");
    }

    #[test]
    fn adds_negative_numbers() {
        let result = CalculatorAddTool::execute(&CalculatorAddParams { a: -4.0, b: 1.0 }).unwrap();
        assert_eq!(result_text(&result), "-4 + 1 = -3");
    }

    #[test]
    fn rejects_overflowing_sum() {
        let err = CalculatorAddTool::execute(&CalculatorAddParams { a: 1e10, b: 1e10 }).unwrap_err();
        match err {
            ToolError::InvalidParams { message, .. } => {
                assert!(message.contains("overflows"));
            }
            other => panic!("expected InvalidParams, got {other:?}"),
        }
    }

    #[test]
    fn schema_declares_bounds_and_closed_object() {
        let definition = CalculatorAddTool::definition();
        assert_eq!(definition.name(), CalculatorAddTool::NAME);

        let schema = definition.input_schema();
        assert_eq!(
            schema.get("additionalProperties"),
            Some(&serde_json::Value::Bool(false))
        );

        let a = &schema["properties"]["a"];
        assert_eq!(a["type"], "number");
        assert_eq!(a["minimum"].as_f64(), Some(MIN_OPERAND));
        assert_eq!(a["maximum"].as_f64(), Some(MAX_OPERAND));

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
    }
}
