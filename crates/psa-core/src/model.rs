//! Automation-rule domain types shared by the inference engine, the stores
//! and the tool surface.
//!
//! Wire shape follows the helpdesk API: camelCase keys, SCREAMING_SNAKE
//! trigger/action codes, sparse config objects with absent optional fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event class that causes a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    TicketCreated,
    TicketUpdated,
    TicketStatusChanged,
    TicketAssigned,
    PriorityChanged,
    SlaWarning,
    SlaBreached,
    Scheduled,
}

impl TriggerType {
    /// Canonical wire code for this trigger.
    pub fn code(&self) -> &'static str {
        match self {
            TriggerType::TicketCreated => "TICKET_CREATED",
            TriggerType::TicketUpdated => "TICKET_UPDATED",
            TriggerType::TicketStatusChanged => "TICKET_STATUS_CHANGED",
            TriggerType::TicketAssigned => "TICKET_ASSIGNED",
            TriggerType::PriorityChanged => "PRIORITY_CHANGED",
            TriggerType::SlaWarning => "SLA_WARNING",
            TriggerType::SlaBreached => "SLA_BREACHED",
            TriggerType::Scheduled => "SCHEDULED",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Effect executed when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Assign,
    ChangePriority,
    ChangeStatus,
    AddNote,
    SendNotification,
    AddTag,
    Escalate,
    CreateTask,
    Webhook,
}

impl ActionType {
    /// Canonical wire code for this action.
    pub fn code(&self) -> &'static str {
        match self {
            ActionType::Assign => "ASSIGN",
            ActionType::ChangePriority => "CHANGE_PRIORITY",
            ActionType::ChangeStatus => "CHANGE_STATUS",
            ActionType::AddNote => "ADD_NOTE",
            ActionType::SendNotification => "SEND_NOTIFICATION",
            ActionType::AddTag => "ADD_TAG",
            ActionType::Escalate => "ESCALATE",
            ActionType::CreateTask => "CREATE_TASK",
            ActionType::Webhook => "WEBHOOK",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Auxiliary trigger settings inferred from the rule description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerConfig {
    /// Normalized priority code (e.g. "P1") the trigger is scoped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Keywords the ticket text must mention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl TriggerConfig {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none() && self.keywords.is_none()
    }
}

/// Auxiliary action settings inferred from the rule description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    /// Agent or team the ticket should be assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<String>,

    /// Recipient of a notification action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_target: Option<String>,

    /// Normalized priority code the ticket should be moved to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_priority: Option<String>,

    /// Body of a note action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_content: Option<String>,
}

impl ActionConfig {
    pub fn is_empty(&self) -> bool {
        self.assign_to.is_none()
            && self.notify_target.is_none()
            && self.target_priority.is_none()
            && self.note_content.is_none()
    }
}

/// Field a condition predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionField {
    Priority,
    Keywords,
    Client,
}

/// Comparison operator of a condition predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    Equals,
    Contains,
}

/// Additional predicate narrowing when a rule applies, independent of the
/// trigger event class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: ConditionField,
    pub operator: ConditionOperator,
    pub value: String,
}

impl Condition {
    pub fn equals(field: ConditionField, value: impl Into<String>) -> Self {
        Self {
            field,
            operator: ConditionOperator::Equals,
            value: value.into(),
        }
    }

    pub fn contains(field: ConditionField, value: impl Into<String>) -> Self {
        Self {
            field,
            operator: ConditionOperator::Contains,
            value: value.into(),
        }
    }
}

/// Pre-persistence rule payload produced by the assembler. The store assigns
/// identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAutomationRule {
    pub user_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    pub name: String,

    /// Original natural-language input, retained verbatim.
    pub description: String,

    pub trigger_type: TriggerType,
    pub trigger_config: TriggerConfig,
    pub action_type: ActionType,
    pub action_config: ActionConfig,

    /// Absent rather than empty when no condition was extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Persisted automation rule as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: String,
    pub user_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    pub name: String,
    pub description: String,

    pub trigger_type: TriggerType,
    pub trigger_config: TriggerConfig,
    pub action_type: ActionType,
    pub action_config: ActionConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AutomationRule {
    /// Materialize a payload into a stored rule.
    pub fn from_new(id: impl Into<String>, new: NewAutomationRule) -> Self {
        Self {
            id: id.into(),
            user_id: new.user_id,
            connection_id: new.connection_id,
            name: new.name,
            description: new.description,
            trigger_type: new.trigger_type,
            trigger_config: new.trigger_config,
            action_type: new.action_type,
            action_config: new.action_config,
            conditions: new.conditions,
            is_active: new.is_active,
            created_at: Utc::now(),
        }
    }
}

/// Sparse update applied by [`crate::store::RuleStore::update`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RulePatch {
    pub fn set_active(is_active: bool) -> Self {
        Self {
            name: None,
            is_active: Some(is_active),
        }
    }
}

/// Filter for [`crate::store::RuleStore::list`].
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    /// Restrict to rules owned by this user.
    pub user_id: Option<String>,

    /// Restrict to rules with this active flag.
    pub is_active: Option<bool>,
}

impl RuleFilter {
    pub fn matches(&self, rule: &AutomationRule) -> bool {
        if let Some(user_id) = &self.user_id {
            if &rule.user_id != user_id {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if rule.is_active != is_active {
                return false;
            }
        }
        true
    }
}
