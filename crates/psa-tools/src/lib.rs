//! Automation tools exposed to the LLM assistant.
//!
//! Each tool is a thin delegation to the rule engine or the rule store with a
//! uniform error mapping: domain failures come back as unsuccessful
//! [`psa_core::ToolResult`]s the model can read, while `ToolError` is
//! reserved for malformed arguments.

pub mod tools;

pub use tools::{
    CreateAutomationRuleTool, DeleteAutomationRuleTool, ListAutomationRulesTool,
    ToggleAutomationRuleTool,
};

use psa_core::store::SharedRuleStore;
use psa_core::tools::{RegistryError, ToolRegistry};
use psa_rules::RuleContext;

/// Register the full automation tool set for one assistant session.
pub fn register_automation_tools(
    registry: &ToolRegistry,
    store: SharedRuleStore,
    ctx: RuleContext,
) -> Result<(), RegistryError> {
    registry.register(CreateAutomationRuleTool::new(store.clone(), ctx.clone()))?;
    registry.register(ListAutomationRulesTool::new(store.clone(), ctx.clone()))?;
    registry.register(ToggleAutomationRuleTool::new(store.clone(), ctx.clone()))?;
    registry.register(DeleteAutomationRuleTool::new(store, ctx))?;
    Ok(())
}
