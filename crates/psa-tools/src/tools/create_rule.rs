//! Tool for creating an automation rule from a natural-language description.

use async_trait::async_trait;
use psa_core::store::SharedRuleStore;
use psa_core::tools::{Tool, ToolError, ToolResult};
use psa_rules::{RuleAssembler, RuleContext, RuleError};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct CreateAutomationRuleArgs {
    name: String,
    description: String,
}

/// Runs the rule inference engine over the description and persists the
/// resulting rule under the session's identity.
pub struct CreateAutomationRuleTool {
    assembler: RuleAssembler,
    ctx: RuleContext,
}

impl CreateAutomationRuleTool {
    pub fn new(store: SharedRuleStore, ctx: RuleContext) -> Self {
        Self {
            assembler: RuleAssembler::new(store),
            ctx,
        }
    }
}

fn failure_message(error: &RuleError) -> String {
    match error.suggestions() {
        Some(suggestions) => format!("{}. Try phrases like: {}", error, suggestions.join(", ")),
        None => error.to_string(),
    }
}

#[async_trait]
impl Tool for CreateAutomationRuleTool {
    fn name(&self) -> &str {
        "create_automation_rule"
    }

    fn description(&self) -> &str {
        "Create a helpdesk automation rule from a plain-English description, e.g. 'When a P1 ticket is created, notify the on-call team'. The trigger, action and conditions are inferred from the text."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Short display name for the rule"
                },
                "description": {
                    "type": "string",
                    "description": "Plain-English sentence describing when the rule fires and what it does"
                }
            },
            "required": ["name", "description"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: CreateAutomationRuleArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        match self
            .assembler
            .create_rule(&args.name, &args.description, &self.ctx)
            .await
        {
            Ok(created) => Ok(ToolResult::ok(format!(
                "{} (id: {})",
                created.message, created.rule.id
            ))),
            Err(error) => Ok(ToolResult::error(failure_message(&error))),
        }
    }
}
