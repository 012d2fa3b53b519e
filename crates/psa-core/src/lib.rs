//! Shared domain model, persistence seam and tool abstraction for the PSA
//! automation assistant.
//!
//! The crates above this one (`psa-rules`, `psa-tools`) only ever talk to the
//! helpdesk backend through the [`RuleStore`] trait defined here.

pub mod model;
pub mod store;
pub mod tools;

pub use model::{
    ActionConfig, ActionType, AutomationRule, Condition, ConditionField, ConditionOperator,
    NewAutomationRule, RuleFilter, RulePatch, TriggerConfig, TriggerType,
};
pub use store::{JsonRuleStore, MemoryRuleStore, RuleStore, SharedRuleStore, StoreError};
pub use tools::{
    FunctionSchema, RegistryError, Tool, ToolError, ToolRegistry, ToolResult, ToolSchema,
};
