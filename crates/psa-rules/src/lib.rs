//! Natural-language rule inference for the PSA automation assistant.
//!
//! Turns a short sentence like "When a P1 ticket is created, notify the
//! on-call team" into a structured automation rule: a trigger, an action and
//! zero or more conditions. Classification is dictionary-driven (ordered
//! phrase lexicons, first-registered-wins) with a handful of regex probes for
//! the auxiliary settings; it is deterministic, stateless and deliberately
//! heuristic.
//!
//! The three extractors run independently over the same text and never fail
//! with an error: a missing trigger or action is an `Option::None` the
//! [`RuleAssembler`] converts into a user-facing failure with phrase
//! suggestions.

pub mod action;
pub mod assembler;
pub mod condition;
pub mod lexicon;
pub mod trigger;

pub use action::{extract_action, ExtractedAction};
pub use assembler::{CreatedRule, RuleAssembler, RuleContext, RuleError};
pub use condition::extract_conditions;
pub use lexicon::{
    action_lexicon, action_suggestions, priority_lexicon, trigger_lexicon, trigger_suggestions,
    LexiconEntry,
};
pub use trigger::{extract_trigger, ExtractedTrigger};
