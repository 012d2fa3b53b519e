//! Persistence seam for automation rules.
//!
//! The engine never talks to the helpdesk backend directly; everything goes
//! through [`RuleStore`], a single-record key-value interface keyed by rule
//! id. Two backends ship with the crate: an in-memory map for tests and
//! embedding, and a JSON-file directory for local persistence.

mod json;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{AutomationRule, NewAutomationRule, RuleFilter, RulePatch};

pub use json::JsonRuleStore;
pub use memory::MemoryRuleStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Rule not found: {0}")]
    NotFound(String),

    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Single-record persistence interface for automation rules.
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Insert a new rule, assigning its id and creation timestamp.
    async fn create(&self, payload: NewAutomationRule) -> Result<AutomationRule>;

    /// Fetch a rule by id.
    async fn get(&self, id: &str) -> Result<Option<AutomationRule>>;

    /// Apply a sparse patch to an existing rule.
    async fn update(&self, id: &str, patch: RulePatch) -> Result<AutomationRule>;

    /// Remove a rule. Returns whether anything was deleted.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// List rules matching the filter, oldest first.
    async fn list(&self, filter: &RuleFilter) -> Result<Vec<AutomationRule>>;
}

pub type SharedRuleStore = Arc<dyn RuleStore>;
