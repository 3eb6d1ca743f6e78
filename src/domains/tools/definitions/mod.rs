//! Tool definitions - one file per tool.
//!
//! When adding a new tool:
//! 1. Create the tool file here (params struct, execute, `definition()`)
//! 2. Export it below
//! 3. Add it to `all()` so it is registered at startup

mod calculator_add;

pub use calculator_add::{CalculatorAddParams, CalculatorAddTool, MAX_OPERAND, MIN_OPERAND};

use super::registry::ToolDefinition;

/// All tool definitions, in the order they are listed to clients.
pub fn all() -> Vec<ToolDefinition> {
    vec![CalculatorAddTool::definition()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_definitions_have_unique_names() {
        let definitions = all();
        assert!(!definitions.is_empty());

        let mut names: Vec<_> = definitions.iter().map(|d| d.name().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), definitions.len());
    }

    #[test]
    fn calculator_add_is_registered() {
        let names: Vec<_> = all().iter().map(|d| d.name().to_string()).collect();
        assert!(names.contains(&CalculatorAddTool::NAME.to_string()));
    }
}
