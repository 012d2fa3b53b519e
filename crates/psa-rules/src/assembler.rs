//! Rule assembly: merge the three extraction results into one persistable
//! automation rule and hand it to the store.

use psa_core::model::NewAutomationRule;
use psa_core::store::{SharedRuleStore, StoreError};
use psa_core::AutomationRule;
use thiserror::Error;

use crate::action::extract_action;
use crate::condition::extract_conditions;
use crate::lexicon::{action_suggestions, trigger_suggestions};
use crate::trigger::extract_trigger;

/// Identity the assembled rule is created under, threaded explicitly per
/// call rather than captured at construction time.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub user_id: String,
    pub connection_id: Option<String>,
}

impl RuleContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            connection_id: None,
        }
    }

    pub fn with_connection(user_id: impl Into<String>, connection_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            connection_id: Some(connection_id.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum RuleError {
    /// No trigger phrase was recognized in the description. Carries sample
    /// phrases the user can rewrite with.
    #[error("could not determine a trigger from the rule description")]
    UnrecognizedTrigger { suggestions: Vec<String> },

    /// No action phrase was recognized in the description.
    #[error("could not determine an action from the rule description")]
    UnrecognizedAction { suggestions: Vec<String> },

    /// The persistence collaborator failed; propagated without retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RuleError {
    /// Suggested phrases for the failed extraction, if any.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            RuleError::UnrecognizedTrigger { suggestions }
            | RuleError::UnrecognizedAction { suggestions } => Some(suggestions),
            RuleError::Store(_) => None,
        }
    }
}

/// Successful outcome of [`RuleAssembler::create_rule`].
#[derive(Debug, Clone)]
pub struct CreatedRule {
    pub rule: AutomationRule,
    /// Confirmation line embedding the rule name, ready to relay to the user.
    pub message: String,
}

/// Public entry point of the inference engine: one stateless
/// extract-assemble-persist pass per call.
pub struct RuleAssembler {
    store: SharedRuleStore,
}

impl RuleAssembler {
    pub fn new(store: SharedRuleStore) -> Self {
        Self { store }
    }

    /// Infer a rule from `description` and persist it.
    ///
    /// Trigger extraction is checked before action extraction, so a
    /// description failing both reports the trigger failure. Nothing is
    /// persisted unless both succeed.
    pub async fn create_rule(
        &self,
        name: &str,
        description: &str,
        ctx: &RuleContext,
    ) -> Result<CreatedRule, RuleError> {
        let trigger = extract_trigger(description);
        let action = extract_action(description);
        let conditions = extract_conditions(description);

        let trigger = trigger.ok_or_else(|| RuleError::UnrecognizedTrigger {
            suggestions: trigger_suggestions(),
        })?;
        let action = action.ok_or_else(|| RuleError::UnrecognizedAction {
            suggestions: action_suggestions(),
        })?;

        let payload = NewAutomationRule {
            user_id: ctx.user_id.clone(),
            connection_id: ctx.connection_id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            trigger_type: trigger.trigger_type,
            trigger_config: trigger.config,
            action_type: action.action_type,
            action_config: action.config,
            conditions: if conditions.is_empty() {
                None
            } else {
                Some(conditions)
            },
            is_active: true,
        };

        let rule = self.store.create(payload).await.map_err(|error| {
            log::warn!("rule store rejected '{}': {}", name, error);
            error
        })?;

        log::info!(
            "created automation rule '{}' ({}): {} -> {}",
            rule.name,
            rule.id,
            rule.trigger_type,
            rule.action_type
        );

        let message = format!(
            "Automation rule \"{}\" created: when {}, then {}.",
            rule.name, rule.trigger_type, rule.action_type
        );
        Ok(CreatedRule { rule, message })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use psa_core::model::{RuleFilter, RulePatch, TriggerType};
    use psa_core::store::{MemoryRuleStore, RuleStore};

    use super::*;

    fn assembler_with_memory() -> (RuleAssembler, Arc<MemoryRuleStore>) {
        let store = Arc::new(MemoryRuleStore::new());
        (RuleAssembler::new(store.clone()), store)
    }

    #[tokio::test]
    async fn assembles_and_persists_a_full_rule() {
        let (assembler, store) = assembler_with_memory();
        let ctx = RuleContext::with_connection("user-1", "conn-1");

        let created = assembler
            .create_rule(
                "P1 escalation",
                "When a P1 ticket is created, notify the on-call team",
                &ctx,
            )
            .await
            .unwrap();

        assert_eq!(created.rule.trigger_type, TriggerType::TicketCreated);
        assert_eq!(created.rule.user_id, "user-1");
        assert_eq!(created.rule.connection_id.as_deref(), Some("conn-1"));
        assert!(created.rule.is_active);
        assert!(created.message.contains("P1 escalation"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn trigger_failure_reports_suggestions_and_persists_nothing() {
        let (assembler, store) = assembler_with_memory();
        let ctx = RuleContext::new("user-1");

        let error = assembler
            .create_rule("printer rule", "Auto-assign printer issues to John", &ctx)
            .await
            .unwrap_err();

        match &error {
            RuleError::UnrecognizedTrigger { suggestions } => {
                assert_eq!(suggestions.len(), 5);
                assert_eq!(suggestions[0], "created");
            }
            other => panic!("expected trigger failure, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn action_failure_reports_action_suggestions() {
        let (assembler, store) = assembler_with_memory();
        let ctx = RuleContext::new("user-1");

        let error = assembler
            .create_rule("noop", "When a ticket is created", &ctx)
            .await
            .unwrap_err();

        assert!(matches!(&error, RuleError::UnrecognizedAction { .. }));
        assert_eq!(error.suggestions().unwrap()[0], "assign");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn trigger_failure_takes_precedence_over_action_failure() {
        let (assembler, _store) = assembler_with_memory();
        let ctx = RuleContext::new("user-1");

        let error = assembler.create_rule("empty", "   ", &ctx).await.unwrap_err();

        assert!(matches!(error, RuleError::UnrecognizedTrigger { .. }));
    }

    struct FailingStore;

    #[async_trait]
    impl RuleStore for FailingStore {
        async fn create(
            &self,
            _payload: NewAutomationRule,
        ) -> Result<AutomationRule, StoreError> {
            Err(StoreError::Backend("insert rejected".to_string()))
        }

        async fn get(&self, _id: &str) -> Result<Option<AutomationRule>, StoreError> {
            Ok(None)
        }

        async fn update(
            &self,
            id: &str,
            _patch: RulePatch,
        ) -> Result<AutomationRule, StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }

        async fn delete(&self, _id: &str) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn list(&self, _filter: &RuleFilter) -> Result<Vec<AutomationRule>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn store_failure_propagates_as_generic_failure() {
        let assembler = RuleAssembler::new(Arc::new(FailingStore));
        let ctx = RuleContext::new("user-1");

        let error = assembler
            .create_rule(
                "doomed",
                "When a ticket is created, notify the manager",
                &ctx,
            )
            .await
            .unwrap_err();

        assert!(matches!(error, RuleError::Store(StoreError::Backend(_))));
        assert!(error.suggestions().is_none());
    }
}
