//! Generic argument validation against tool input schemas.
//!
//! Tool schemas are derived from each tool's params struct (via schemars)
//! and this module interprets the relevant JSON Schema subset directly:
//! object properties, required fields, numeric type and range constraints,
//! and the closed-object policy (`additionalProperties: false`).
//!
//! Validation happens once, at the dispatch boundary. A handler that runs
//! at all runs with arguments the schema has already accepted, so tool
//! logic never re-checks its input.

use rmcp::model::JsonObject;
use serde::Serialize;
use serde_json::Value;

/// Integers beyond this magnitude cannot round-trip through a double.
const MAX_SAFE_INTEGER: u64 = 1 << 53;

/// A single validation failure: the offending field and what went wrong.
///
/// `path` is the dot-joined field path from the argument root (e.g. `a`
/// or `options.depth`). Issues are reported in schema declaration order,
/// with unknown-field rejections last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Dot-joined path of the field this issue refers to.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validate raw call arguments against a tool's input schema.
///
/// Returns `Ok(())` when every declared constraint holds, otherwise the
/// complete, non-empty list of issues. Callers summarize with the first
/// issue but keep the full list for diagnostics.
pub fn validate_arguments(
    schema: &JsonObject,
    arguments: &JsonObject,
) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    check_object("", schema, arguments, &mut issues);

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Validate one object level of the schema, recursing into nested objects.
fn check_object(
    prefix: &str,
    schema: &JsonObject,
    value: &JsonObject,
    issues: &mut Vec<ValidationIssue>,
) {
    let empty = serde_json::Map::new();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for (name, field_schema) in properties {
        let path = join_path(prefix, name);
        match value.get(name) {
            Some(field_value) => {
                if let Some(field_schema) = field_schema.as_object() {
                    check_value(&path, field_schema, field_value, issues);
                }
            }
            None => {
                if required.contains(&name.as_str()) {
                    issues.push(ValidationIssue::new(path, "missing required field"));
                }
            }
        }
    }

    // Closed-object policy: anything the schema does not declare is an
    // outright rejection, not a silent drop.
    if schema.get("additionalProperties") == Some(&Value::Bool(false)) {
        for name in value.keys() {
            if !properties.contains_key(name) {
                issues.push(ValidationIssue::new(
                    join_path(prefix, name),
                    "unknown field not permitted by the tool schema",
                ));
            }
        }
    }
}

/// Validate a single field value against its schema fragment.
fn check_value(
    path: &str,
    schema: &JsonObject,
    value: &Value,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(expected) = schema.get("type").and_then(Value::as_str) else {
        return;
    };

    match expected {
        "number" => check_number(path, schema, value, issues),
        "integer" => {
            if value.as_i64().is_none() && value.as_u64().is_none() {
                issues.push(type_mismatch(path, "an integer", value));
            } else {
                check_bounds(path, schema, value.as_f64().unwrap_or_default(), issues);
            }
        }
        "string" => {
            if !value.is_string() {
                issues.push(type_mismatch(path, "a string", value));
            }
        }
        "boolean" => {
            if !value.is_boolean() {
                issues.push(type_mismatch(path, "a boolean", value));
            }
        }
        "array" => {
            if !value.is_array() {
                issues.push(type_mismatch(path, "an array", value));
            }
        }
        "object" => match value.as_object() {
            Some(nested) => check_object(path, schema, nested, issues),
            None => issues.push(type_mismatch(path, "an object", value)),
        },
        _ => {}
    }
}

fn check_number(
    path: &str,
    schema: &JsonObject,
    value: &Value,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(number) = value.as_f64() else {
        issues.push(type_mismatch(path, "a number", value));
        return;
    };

    if !number.is_finite() {
        issues.push(ValidationIssue::new(path, "must be a finite number"));
        return;
    }

    // serde_json keeps large integers as i64/u64; reject anything that
    // would silently lose precision when treated as a double.
    let lossless = match (value.as_i64(), value.as_u64()) {
        (Some(i), _) => i.unsigned_abs() <= MAX_SAFE_INTEGER,
        (None, Some(u)) => u <= MAX_SAFE_INTEGER,
        _ => true,
    };
    if !lossless {
        issues.push(ValidationIssue::new(
            path,
            "integer is too large to represent exactly as a number",
        ));
        return;
    }

    check_bounds(path, schema, number, issues);
}

fn check_bounds(path: &str, schema: &JsonObject, number: f64, issues: &mut Vec<ValidationIssue>) {
    if let Some(min) = schema.get("minimum").and_then(Value::as_f64)
        && number < min
    {
        issues.push(ValidationIssue::new(path, format!("must be at least {min}")));
    }
    if let Some(max) = schema.get("maximum").and_then(Value::as_f64)
        && number > max
    {
        issues.push(ValidationIssue::new(path, format!("must be at most {max}")));
    }
}

fn type_mismatch(path: &str, expected: &str, value: &Value) -> ValidationIssue {
    ValidationIssue::new(path, format!("expected {expected}, got {}", type_name(value)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: Value) -> JsonObject {
        value.as_object().expect("schema must be an object").clone()
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().expect("args must be an object").clone()
    }

    fn numeric_pair_schema() -> JsonObject {
        schema(json!({
            "type": "object",
            "properties": {
                "a": { "type": "number", "minimum": -1e10, "maximum": 1e10 },
                "b": { "type": "number", "minimum": -1e10, "maximum": 1e10 }
            },
            "required": ["a", "b"],
            "additionalProperties": false
        }))
    }

    #[test]
    fn accepts_valid_arguments() {
        let result = validate_arguments(&numeric_pair_schema(), &args(json!({ "a": 5, "b": 3 })));
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_wrong_type_with_field_path() {
        let issues = validate_arguments(&numeric_pair_schema(), &args(json!({ "a": "x", "b": 3 })))
            .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "a");
        assert!(issues[0].message.contains("expected a number"));
    }

    #[test]
    fn rejects_unknown_field() {
        let issues =
            validate_arguments(&numeric_pair_schema(), &args(json!({ "a": 1, "b": 2, "c": 3 })))
                .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "c");
        assert!(issues[0].message.contains("unknown field"));
    }

    #[test]
    fn rejects_missing_required_field() {
        let issues =
            validate_arguments(&numeric_pair_schema(), &args(json!({ "a": 1 }))).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "b");
        assert_eq!(issues[0].message, "missing required field");
    }

    #[test]
    fn rejects_out_of_range_number() {
        let issues =
            validate_arguments(&numeric_pair_schema(), &args(json!({ "a": 2e10, "b": 0 })))
                .unwrap_err();
        assert_eq!(issues[0].path, "a");
        assert!(issues[0].message.contains("at most"));
    }

    #[test]
    fn rejects_integer_losing_precision() {
        // 2^53 + 1 has no exact double representation.
        let issues = validate_arguments(
            &numeric_pair_schema(),
            &args(json!({ "a": 9007199254740993u64, "b": 0 })),
        )
        .unwrap_err();
        assert_eq!(issues[0].path, "a");
        assert!(issues[0].message.contains("exactly"));
    }

    #[test]
    fn collects_every_issue_in_order() {
        let issues = validate_arguments(
            &numeric_pair_schema(),
            &args(json!({ "a": "x", "extra": true })),
        )
        .unwrap_err();
        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "extra"]);
    }

    #[test]
    fn nested_object_paths_are_dot_joined() {
        let schema = schema(json!({
            "type": "object",
            "properties": {
                "options": {
                    "type": "object",
                    "properties": { "depth": { "type": "integer" } },
                    "required": ["depth"],
                    "additionalProperties": false
                }
            },
            "required": ["options"],
            "additionalProperties": false
        }));

        let issues = validate_arguments(&schema, &args(json!({ "options": { "depth": "deep" } })))
            .unwrap_err();
        assert_eq!(issues[0].path, "options.depth");
    }

    #[test]
    fn open_schema_allows_extra_fields() {
        let schema = schema(json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        }));
        assert!(validate_arguments(&schema, &args(json!({ "name": "x", "extra": 1 }))).is_ok());
    }
}
