use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::model::{AutomationRule, NewAutomationRule, RuleFilter, RulePatch};

use super::{Result, RuleStore, StoreError};

/// In-memory rule store keyed by rule id.
///
/// Safe to share across concurrent tool invocations; every method is a single
/// map operation.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: DashMap<String, AutomationRule>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self {
            rules: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[async_trait]
impl RuleStore for MemoryRuleStore {
    async fn create(&self, payload: NewAutomationRule) -> Result<AutomationRule> {
        let id = Uuid::new_v4().to_string();
        let rule = AutomationRule::from_new(id.clone(), payload);
        self.rules.insert(id, rule.clone());
        Ok(rule)
    }

    async fn get(&self, id: &str) -> Result<Option<AutomationRule>> {
        Ok(self.rules.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, patch: RulePatch) -> Result<AutomationRule> {
        let mut entry = self
            .rules
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let rule = entry.value_mut();
        if let Some(name) = patch.name {
            rule.name = name;
        }
        if let Some(is_active) = patch.is_active {
            rule.is_active = is_active;
        }
        Ok(rule.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.rules.remove(id).is_some())
    }

    async fn list(&self, filter: &RuleFilter) -> Result<Vec<AutomationRule>> {
        let mut rules: Vec<AutomationRule> = self
            .rules
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        rules.sort_by(|left, right| left.created_at.cmp(&right.created_at));
        Ok(rules)
    }
}
