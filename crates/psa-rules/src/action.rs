//! Action extraction: what the rule should do, plus assignment, notification,
//! priority and note settings probed from the same sentence.

use std::sync::OnceLock;

use psa_core::model::{ActionConfig, ActionType};
use regex::Regex;

use crate::lexicon::{self, priority_lexicon};

/// Action classification for one rule description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAction {
    pub action_type: ActionType,
    pub config: ActionConfig,
}

fn assign_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\bassign(?:\s+to)?\s+([^,.;]+)").expect("assign pattern is valid")
    })
}

fn notify_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\bnotify\s+(?:the\s+)?([^,.;]+)").expect("notify pattern is valid")
    })
}

fn note_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\badd\s+(?:a\s+)?note[:\s]\s*(.+)").expect("note pattern is valid")
    })
}

/// Scan a description for the action phrase and its auxiliary config.
///
/// The four config probes are independent and non-exclusive; more than one
/// may populate the config for a single description. Returns `None` when no
/// action phrase is present.
pub fn extract_action(text: &str) -> Option<ExtractedAction> {
    let lowered = text.to_lowercase();
    let action_type = lexicon::match_first(&lowered, lexicon::action_lexicon())?;

    let config = ActionConfig {
        assign_to: capture_trimmed(assign_pattern(), text),
        notify_target: capture_trimmed(notify_pattern(), text),
        target_priority: extract_target_priority(&lowered),
        note_content: capture_trimmed(note_pattern(), text),
    };

    log::debug!("action extraction: {} from {:?}", action_type, text);
    Some(ExtractedAction {
        action_type,
        config,
    })
}

fn capture_trimmed(pattern: &Regex, text: &str) -> Option<String> {
    let captured = pattern.captures(text)?.get(1)?.as_str().trim();
    if captured.is_empty() {
        None
    } else {
        Some(captured.to_string())
    }
}

/// "to <priority>" / "as <priority>" probe. Unlike the trigger-side priority
/// scan this stops at the first matching lexicon entry; the asymmetry is
/// inherited behavior and covered by tests.
fn extract_target_priority(lowered: &str) -> Option<String> {
    for entry in priority_lexicon() {
        if lowered.contains(&format!("to {}", entry.phrase))
            || lowered.contains(&format!("as {}", entry.phrase))
        {
            return Some(entry.code.to_string());
        }
    }
    None
}
