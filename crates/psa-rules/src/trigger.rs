//! Trigger extraction: which event class should fire the rule, plus the
//! auxiliary priority/keyword settings read from the same sentence.

use std::sync::OnceLock;

use psa_core::model::{TriggerConfig, TriggerType};
use regex::Regex;

use crate::lexicon::{self, priority_lexicon};

/// Trigger classification for one rule description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTrigger {
    pub trigger_type: TriggerType,
    pub config: TriggerConfig,
}

/// Pattern for "about X", "regarding X", "contains X" style keyword clauses.
/// Runs over the original text so keyword casing is preserved; the quoted
/// alternative wins over the bare one, which stops at sentence punctuation.
fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:about|regarding|contains?|mentions?|includes?)\s+(?:"([^"]+)"|([^,.;!?]+))"#)
            .expect("keyword pattern is valid")
    })
}

/// Scan a description for the trigger phrase and its auxiliary config.
///
/// Returns `None` when no trigger phrase is present; this is the signal the
/// assembler turns into an "unrecognized trigger" failure.
pub fn extract_trigger(text: &str) -> Option<ExtractedTrigger> {
    let lowered = text.to_lowercase();
    let trigger_type = lexicon::match_first(&lowered, lexicon::trigger_lexicon())?;

    let mut config = TriggerConfig::default();

    // Contains-scan over every priority phrase; each hit overwrites, so the
    // last registered matching phrase wins. The action extractor does the
    // opposite (first wins) and the two are kept separate on purpose.
    for entry in priority_lexicon() {
        if lowered.contains(entry.phrase) {
            config.priority = Some(entry.code.to_string());
        }
    }

    config.keywords = extract_keywords(text);

    log::debug!("trigger extraction: {} from {:?}", trigger_type, text);
    Some(ExtractedTrigger {
        trigger_type,
        config,
    })
}

/// Keyword list from the first "about/regarding/contains/..." clause, split
/// on commas and whitespace with empty tokens dropped.
fn extract_keywords(text: &str) -> Option<Vec<String>> {
    let captures = keyword_pattern().captures(text)?;
    let captured = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())?;

    let keywords: Vec<String> = captured
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_ticket_created() {
        let extracted = extract_trigger("When a ticket is created, escalate").unwrap();
        assert_eq!(extracted.trigger_type, TriggerType::TicketCreated);
        assert!(extracted.config.is_empty());
    }

    #[test]
    fn recognizes_status_change_with_inflection() {
        let extracted = extract_trigger("When status changes to P1 add note: check").unwrap();
        assert_eq!(extracted.trigger_type, TriggerType::TicketStatusChanged);
    }

    #[test]
    fn captures_priority_from_phrase() {
        let extracted = extract_trigger("When a P1 ticket is created, notify the team").unwrap();
        assert_eq!(extracted.config.priority.as_deref(), Some("P1"));
    }

    #[test]
    fn priority_scan_is_last_registered_wins() {
        // "p1" and "low" both occur; "low" is registered later and the scan
        // overwrites on every hit.
        let extracted = extract_trigger("When a p1 ticket is created mark it low").unwrap();
        assert_eq!(extracted.config.priority.as_deref(), Some("P4"));
    }

    #[test]
    fn captures_keywords_preserving_case() {
        let extracted =
            extract_trigger("When a ticket about VPN is created, add the networking tag").unwrap();
        let keywords = extracted.config.keywords.unwrap();
        assert!(keywords.contains(&"VPN".to_string()));
    }

    #[test]
    fn captures_quoted_keyword_list() {
        let extracted =
            extract_trigger("When a ticket mentions \"printer, scanner\" is created").unwrap();
        assert_eq!(
            extracted.config.keywords,
            Some(vec!["printer".to_string(), "scanner".to_string()])
        );
    }

    #[test]
    fn returns_none_without_trigger_phrase() {
        assert_eq!(extract_trigger("Auto-assign printer issues to John"), None);
        assert_eq!(extract_trigger(""), None);
        assert_eq!(extract_trigger("   "), None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "When a P1 ticket about VPN is created, notify the on-call team";
        let first = extract_trigger(text);
        let second = extract_trigger(text);
        assert_eq!(first, second);
    }
}
