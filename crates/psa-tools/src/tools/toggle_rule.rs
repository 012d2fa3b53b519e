//! Tool for pausing or resuming an automation rule.

use async_trait::async_trait;
use psa_core::model::RulePatch;
use psa_core::store::SharedRuleStore;
use psa_core::tools::{Tool, ToolError, ToolResult};
use psa_rules::RuleContext;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ToggleAutomationRuleArgs {
    rule_id: String,
    is_active: bool,
}

pub struct ToggleAutomationRuleTool {
    store: SharedRuleStore,
    ctx: RuleContext,
}

impl ToggleAutomationRuleTool {
    pub fn new(store: SharedRuleStore, ctx: RuleContext) -> Self {
        Self { store, ctx }
    }

    /// A rule owned by another user is reported as missing, not forbidden.
    async fn owned_rule_exists(&self, rule_id: &str) -> Result<bool, psa_core::StoreError> {
        Ok(self
            .store
            .get(rule_id)
            .await?
            .map(|rule| rule.user_id == self.ctx.user_id)
            .unwrap_or(false))
    }
}

#[async_trait]
impl Tool for ToggleAutomationRuleTool {
    fn name(&self) -> &str {
        "toggle_automation_rule"
    }

    fn description(&self) -> &str {
        "Activate or pause an existing automation rule by id."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "rule_id": {
                    "type": "string",
                    "description": "Id of the rule to toggle"
                },
                "is_active": {
                    "type": "boolean",
                    "description": "true to activate the rule, false to pause it"
                }
            },
            "required": ["rule_id", "is_active"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: ToggleAutomationRuleArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        match self.owned_rule_exists(&args.rule_id).await {
            Ok(false) => {
                return Ok(ToolResult::error(format!(
                    "Rule not found: {}",
                    args.rule_id
                )))
            }
            Err(error) => return Ok(ToolResult::error(error.to_string())),
            Ok(true) => {}
        }

        match self
            .store
            .update(&args.rule_id, RulePatch::set_active(args.is_active))
            .await
        {
            Ok(rule) => {
                let state = if rule.is_active { "active" } else { "paused" };
                Ok(ToolResult::ok(format!(
                    "Automation rule \"{}\" is now {}.",
                    rule.name, state
                )))
            }
            Err(error) => {
                log::warn!("toggling rule {} failed: {}", args.rule_id, error);
                Ok(ToolResult::error(error.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use psa_core::store::{MemoryRuleStore, RuleStore};
    use psa_rules::RuleAssembler;

    use super::*;

    async fn store_with_rule() -> (Arc<MemoryRuleStore>, String) {
        let store = Arc::new(MemoryRuleStore::new());
        let assembler = RuleAssembler::new(store.clone());
        let created = assembler
            .create_rule(
                "rule",
                "When a ticket is created, escalate",
                &RuleContext::new("user-1"),
            )
            .await
            .unwrap();
        (store, created.rule.id)
    }

    #[tokio::test]
    async fn pauses_an_owned_rule() {
        let (store, rule_id) = store_with_rule().await;
        let tool = ToggleAutomationRuleTool::new(store.clone(), RuleContext::new("user-1"));

        let result = tool
            .execute(json!({"rule_id": rule_id, "is_active": false}))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.result.contains("paused"));
        assert!(!store.get(&rule_id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn foreign_rule_reads_as_missing() {
        let (store, rule_id) = store_with_rule().await;
        let tool = ToggleAutomationRuleTool::new(store.clone(), RuleContext::new("intruder"));

        let result = tool
            .execute(json!({"rule_id": rule_id, "is_active": false}))
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.result.contains("Rule not found"));
        assert!(store.get(&rule_id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn unknown_rule_id_fails_cleanly() {
        let (store, _rule_id) = store_with_rule().await;
        let tool = ToggleAutomationRuleTool::new(store, RuleContext::new("user-1"));

        let result = tool
            .execute(json!({"rule_id": "missing", "is_active": true}))
            .await
            .unwrap();

        assert!(!result.success);
        assert!(result.result.contains("Rule not found: missing"));
    }
}
