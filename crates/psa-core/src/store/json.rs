use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::model::{AutomationRule, NewAutomationRule, RuleFilter, RulePatch};

use super::{Result, RuleStore, StoreError};

/// File-backed rule store: one JSON document per rule under a base directory.
///
/// This is the local stand-in for the external key-value store; the file name
/// is the rule id.
#[derive(Debug, Clone)]
pub struct JsonRuleStore {
    base_path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    fn rule_path(&self, id: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    async fn read_rule(&self, path: &Path) -> Result<Option<AutomationRule>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn write_rule(&self, rule: &AutomationRule) -> Result<()> {
        let json = serde_json::to_string_pretty(rule)?;
        fs::write(self.rule_path(&rule.id), json).await?;
        log::debug!("persisted rule {} under {:?}", rule.id, self.base_path);
        Ok(())
    }
}

#[async_trait]
impl RuleStore for JsonRuleStore {
    async fn create(&self, payload: NewAutomationRule) -> Result<AutomationRule> {
        let id = Uuid::new_v4().to_string();
        let rule = AutomationRule::from_new(id, payload);
        self.write_rule(&rule).await?;
        Ok(rule)
    }

    async fn get(&self, id: &str) -> Result<Option<AutomationRule>> {
        self.read_rule(&self.rule_path(id)).await
    }

    async fn update(&self, id: &str, patch: RulePatch) -> Result<AutomationRule> {
        let mut rule = self
            .get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            rule.name = name;
        }
        if let Some(is_active) = patch.is_active {
            rule.is_active = is_active;
        }

        self.write_rule(&rule).await?;
        Ok(rule)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        match fs::remove_file(self.rule_path(id)).await {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    async fn list(&self, filter: &RuleFilter) -> Result<Vec<AutomationRule>> {
        let mut rules = Vec::new();
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(rules);
            }
            Err(error) => return Err(error.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // Skip unreadable or foreign files rather than failing the listing.
            if let Ok(Some(rule)) = self.read_rule(&path).await {
                if filter.matches(&rule) {
                    rules.push(rule);
                }
            }
        }

        rules.sort_by(|left, right| left.created_at.cmp(&right.created_at));
        Ok(rules)
    }
}
