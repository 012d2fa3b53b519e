//! Tool for listing the session owner's automation rules.

use async_trait::async_trait;
use psa_core::model::RuleFilter;
use psa_core::store::SharedRuleStore;
use psa_core::tools::{Tool, ToolError, ToolResult};
use psa_core::AutomationRule;
use psa_rules::RuleContext;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
struct ListAutomationRulesArgs {
    #[serde(default)]
    active_only: bool,
}

pub struct ListAutomationRulesTool {
    store: SharedRuleStore,
    ctx: RuleContext,
}

impl ListAutomationRulesTool {
    pub fn new(store: SharedRuleStore, ctx: RuleContext) -> Self {
        Self { store, ctx }
    }
}

fn format_rule(rule: &AutomationRule) -> String {
    let state = if rule.is_active { "active" } else { "paused" };
    format!(
        "- **{}** ({}) `{}`: {} -> {}",
        rule.name, state, rule.id, rule.trigger_type, rule.action_type
    )
}

#[async_trait]
impl Tool for ListAutomationRulesTool {
    fn name(&self) -> &str {
        "list_automation_rules"
    }

    fn description(&self) -> &str {
        "List the automation rules owned by the current user, optionally restricted to active ones."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "active_only": {
                    "type": "boolean",
                    "default": false,
                    "description": "Only return rules that are currently active"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: ListAutomationRulesArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let filter = RuleFilter {
            user_id: Some(self.ctx.user_id.clone()),
            is_active: args.active_only.then_some(true),
        };

        match self.store.list(&filter).await {
            Ok(rules) if rules.is_empty() => Ok(ToolResult::ok("No automation rules found.")),
            Ok(rules) => {
                let lines: Vec<String> = rules.iter().map(format_rule).collect();
                Ok(ToolResult::markdown(format!(
                    "{} automation rule(s):\n{}",
                    rules.len(),
                    lines.join("\n")
                )))
            }
            Err(error) => {
                log::warn!("listing automation rules failed: {}", error);
                Ok(ToolResult::error(error.to_string()))
            }
        }
    }
}
