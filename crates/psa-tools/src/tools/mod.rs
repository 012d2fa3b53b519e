mod create_rule;
mod delete_rule;
mod list_rules;
mod toggle_rule;

pub use create_rule::CreateAutomationRuleTool;
pub use delete_rule::DeleteAutomationRuleTool;
pub use list_rules::ListAutomationRulesTool;
pub use toggle_rule::ToggleAutomationRuleTool;
