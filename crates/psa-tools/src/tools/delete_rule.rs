//! Tool for deleting an automation rule.

use async_trait::async_trait;
use psa_core::store::SharedRuleStore;
use psa_core::tools::{Tool, ToolError, ToolResult};
use psa_rules::RuleContext;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct DeleteAutomationRuleArgs {
    rule_id: String,
}

pub struct DeleteAutomationRuleTool {
    store: SharedRuleStore,
    ctx: RuleContext,
}

impl DeleteAutomationRuleTool {
    pub fn new(store: SharedRuleStore, ctx: RuleContext) -> Self {
        Self { store, ctx }
    }
}

#[async_trait]
impl Tool for DeleteAutomationRuleTool {
    fn name(&self) -> &str {
        "delete_automation_rule"
    }

    fn description(&self) -> &str {
        "Permanently delete an automation rule by id."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "rule_id": {
                    "type": "string",
                    "description": "Id of the rule to delete"
                }
            },
            "required": ["rule_id"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: DeleteAutomationRuleArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        // Ownership check first so foreign rules read as missing.
        let owned = match self.store.get(&args.rule_id).await {
            Ok(Some(rule)) => rule.user_id == self.ctx.user_id,
            Ok(None) => false,
            Err(error) => return Ok(ToolResult::error(error.to_string())),
        };
        if !owned {
            return Ok(ToolResult::error(format!(
                "Rule not found: {}",
                args.rule_id
            )));
        }

        match self.store.delete(&args.rule_id).await {
            Ok(true) => Ok(ToolResult::ok(format!(
                "Automation rule {} deleted.",
                args.rule_id
            ))),
            Ok(false) => Ok(ToolResult::error(format!(
                "Rule not found: {}",
                args.rule_id
            ))),
            Err(error) => {
                log::warn!("deleting rule {} failed: {}", args.rule_id, error);
                Ok(ToolResult::error(error.to_string()))
            }
        }
    }
}
