use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Faults in tool dispatch itself. Domain-level failures (an unrecognized
/// rule description, a missing rule id) are reported through
/// [`ToolResult::success`] instead so the assistant can read and relay them.
#[derive(Error, Debug, Clone)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Execution failed: {0}")]
    Execution(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Outcome of a tool invocation, always surfaced to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    /// Human/model-readable payload or error message.
    pub result: String,

    /// Optional rendering hint for the client (e.g. "markdown").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_preference: Option<String>,
}

impl ToolResult {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
            display_preference: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: message.into(),
            display_preference: None,
        }
    }

    pub fn markdown(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
            display_preference: Some("markdown".to_string()),
        }
    }
}

/// Function-calling schema advertised for a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub function: FunctionSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
