//! Condition extraction: additional predicates narrowing when a rule fires.
//!
//! Runs independently of trigger/action matching and never fails; text that
//! classifies as neither still yields its conditions.

use std::sync::OnceLock;

use psa_core::model::{Condition, ConditionField};
use regex::Regex;

use crate::lexicon::priority_lexicon;

/// "about X" / "regarding X" / "contains X" / "subject X" keyword clauses;
/// every non-overlapping occurrence contributes one condition.
fn keyword_clause_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:about|regarding|contains?|mentions?|subject)\s+(?:"([^"]+)"|([\w-]+))"#)
            .expect("keyword clause pattern is valid")
    })
}

/// `"X" in subject/title/summary` clauses.
fn quoted_subject_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)"([^"]+)"\s+(?:in\s+)?(?:subject|title|summary)"#)
            .expect("quoted subject pattern is valid")
    })
}

/// `from/for/client X` clauses; only the first match is used.
fn client_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:from|for|client)\s+(?:"([^"]+)"|([^,.;!?]+))"#)
            .expect("client pattern is valid")
    })
}

/// Collect every condition clause present in the text.
///
/// Priority equality, keyword containment and client equality probes are all
/// additive; duplicates are not collapsed.
pub fn extract_conditions(text: &str) -> Vec<Condition> {
    let lowered = text.to_lowercase();
    let mut conditions = Vec::new();

    // Priority equality. The "<phrase> ticket" form covers descriptions like
    // "when a P1 ticket is created" that never spell out "priority P1".
    for entry in priority_lexicon() {
        let phrase = entry.phrase;
        if lowered.contains(&format!("is {phrase}"))
            || lowered.contains(&format!("priority {phrase}"))
            || lowered.contains(&format!("{phrase} ticket"))
        {
            conditions.push(Condition::equals(ConditionField::Priority, entry.code));
        }
    }

    for captures in keyword_clause_pattern().captures_iter(text) {
        if let Some(value) = captures.get(1).or_else(|| captures.get(2)) {
            conditions.push(Condition::contains(
                ConditionField::Keywords,
                value.as_str().trim(),
            ));
        }
    }

    for captures in quoted_subject_pattern().captures_iter(text) {
        if let Some(value) = captures.get(1) {
            conditions.push(Condition::contains(
                ConditionField::Keywords,
                value.as_str().trim(),
            ));
        }
    }

    if let Some(captures) = client_pattern().captures(text) {
        if let Some(value) = captures.get(1).or_else(|| captures.get(2)) {
            conditions.push(Condition::equals(
                ConditionField::Client,
                value.as_str().trim(),
            ));
        }
    }

    conditions
}
