//! Static phrase lexicons for trigger, action and priority classification.
//!
//! Matching is case-insensitive substring containment against the lowercased
//! input. The tables are ordered `const` slices: when several phrases are
//! present in the text, the first registered entry wins. Never reorder an
//! entry without checking the tests that pin the precedence.

use psa_core::model::{ActionType, TriggerType};

/// One phrase-to-code mapping.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry<T: Copy + 'static> {
    /// Lowercase fragment searched for in the input.
    pub phrase: &'static str,
    /// Canonical code the phrase normalizes to.
    pub code: T,
    /// Human-readable label, informational only.
    pub description: &'static str,
}

const fn entry<T: Copy>(phrase: &'static str, code: T, description: &'static str) -> LexiconEntry<T> {
    LexiconEntry {
        phrase,
        code,
        description,
    }
}

const TRIGGER_LEXICON: &[LexiconEntry<TriggerType>] = &[
    entry("created", TriggerType::TicketCreated, "a new ticket is logged"),
    entry("new ticket", TriggerType::TicketCreated, "a new ticket is logged"),
    entry(
        "status change",
        TriggerType::TicketStatusChanged,
        "a ticket moves to another status",
    ),
    entry("updated", TriggerType::TicketUpdated, "a ticket is updated"),
    entry(
        "assigned",
        TriggerType::TicketAssigned,
        "a ticket is assigned to an agent",
    ),
    entry(
        "priority change",
        TriggerType::PriorityChanged,
        "a ticket's priority is changed",
    ),
    entry(
        "sla warning",
        TriggerType::SlaWarning,
        "a ticket approaches its SLA target",
    ),
    entry(
        "sla breach",
        TriggerType::SlaBreached,
        "a ticket misses its SLA target",
    ),
    entry("every day", TriggerType::Scheduled, "runs on a schedule"),
    entry("scheduled", TriggerType::Scheduled, "runs on a schedule"),
];

// "add note" and "add a note" are registered ahead of "escalate" so that a
// note whose content mentions escalation still classifies as ADD_NOTE.
const ACTION_LEXICON: &[LexiconEntry<ActionType>] = &[
    entry("assign", ActionType::Assign, "assign the ticket"),
    entry(
        "change priority",
        ActionType::ChangePriority,
        "change the ticket priority",
    ),
    entry(
        "set priority",
        ActionType::ChangePriority,
        "change the ticket priority",
    ),
    entry(
        "change status",
        ActionType::ChangeStatus,
        "move the ticket to another status",
    ),
    entry(
        "set status",
        ActionType::ChangeStatus,
        "move the ticket to another status",
    ),
    entry("add note", ActionType::AddNote, "append a note to the ticket"),
    entry(
        "add a note",
        ActionType::AddNote,
        "append a note to the ticket",
    ),
    entry(
        "notify",
        ActionType::SendNotification,
        "send a notification",
    ),
    entry(
        "send notification",
        ActionType::SendNotification,
        "send a notification",
    ),
    entry("alert", ActionType::SendNotification, "send a notification"),
    entry("tag", ActionType::AddTag, "tag the ticket"),
    entry("escalate", ActionType::Escalate, "escalate the ticket"),
    entry("create task", ActionType::CreateTask, "create a follow-up task"),
    entry(
        "create a task",
        ActionType::CreateTask,
        "create a follow-up task",
    ),
    entry("webhook", ActionType::Webhook, "call an outbound webhook"),
];

const PRIORITY_LEXICON: &[LexiconEntry<&'static str>] = &[
    entry("p1", "P1", "critical"),
    entry("critical", "P1", "critical"),
    entry("urgent", "P1", "critical"),
    entry("p2", "P2", "high"),
    entry("high", "P2", "high"),
    entry("p3", "P3", "medium"),
    entry("medium", "P3", "medium"),
    entry("normal", "P3", "medium"),
    entry("p4", "P4", "low"),
    entry("low", "P4", "low"),
];

pub fn trigger_lexicon() -> &'static [LexiconEntry<TriggerType>] {
    TRIGGER_LEXICON
}

pub fn action_lexicon() -> &'static [LexiconEntry<ActionType>] {
    ACTION_LEXICON
}

pub fn priority_lexicon() -> &'static [LexiconEntry<&'static str>] {
    PRIORITY_LEXICON
}

/// First registered entry whose phrase occurs in the lowercased text.
pub(crate) fn match_first<T: Copy>(lowered: &str, lexicon: &[LexiconEntry<T>]) -> Option<T> {
    lexicon
        .iter()
        .find(|entry| lowered.contains(entry.phrase))
        .map(|entry| entry.code)
}

const SUGGESTION_COUNT: usize = 5;

fn suggestions<T: Copy>(lexicon: &[LexiconEntry<T>]) -> Vec<String> {
    lexicon
        .iter()
        .take(SUGGESTION_COUNT)
        .map(|entry| entry.phrase.to_string())
        .collect()
}

/// Sample trigger phrases offered when no trigger was recognized.
pub fn trigger_suggestions() -> Vec<String> {
    suggestions(TRIGGER_LEXICON)
}

/// Sample action phrases offered when no action was recognized.
pub fn action_suggestions() -> Vec<String> {
    suggestions(ACTION_LEXICON)
}
