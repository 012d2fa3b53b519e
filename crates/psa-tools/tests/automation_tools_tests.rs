//! Integration tests for the automation tool surface: registry wiring,
//! schemas, and a create/list/toggle/delete round trip through the tools.

use std::sync::Arc;

use psa_core::store::MemoryRuleStore;
use psa_core::tools::ToolRegistry;
use psa_rules::RuleContext;
use psa_tools::register_automation_tools;
use serde_json::json;

fn setup() -> ToolRegistry {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = ToolRegistry::new();
    let store = Arc::new(MemoryRuleStore::new());
    register_automation_tools(&registry, store, RuleContext::new("user-1")).unwrap();
    registry
}

#[test]
fn registers_all_four_tools_with_schemas() {
    let registry = setup();

    assert_eq!(
        registry.list_tool_names(),
        vec![
            "create_automation_rule",
            "delete_automation_rule",
            "list_automation_rules",
            "toggle_automation_rule",
        ]
    );

    for schema in registry.list_tools() {
        assert_eq!(schema.schema_type, "function");
        assert!(!schema.function.description.is_empty());
        assert_eq!(schema.function.parameters["type"], json!("object"));
    }
}

#[tokio::test]
async fn create_list_toggle_delete_round_trip() {
    let registry = setup();

    let created = registry
        .execute(
            "create_automation_rule",
            json!({
                "name": "p1 alert",
                "description": "When a P1 ticket is created, notify the on-call team"
            }),
        )
        .await
        .unwrap();
    assert!(created.success, "{}", created.result);

    let listed = registry
        .execute("list_automation_rules", json!({}))
        .await
        .unwrap();
    assert!(listed.success);
    assert!(listed.result.contains("p1 alert"));

    // The create confirmation embeds the id as "(id: <uuid>)".
    let rule_id = created
        .result
        .rsplit("(id: ")
        .next()
        .and_then(|tail| tail.strip_suffix(')'))
        .expect("confirmation message carries the rule id")
        .to_string();

    let toggled = registry
        .execute(
            "toggle_automation_rule",
            json!({"rule_id": rule_id, "is_active": false}),
        )
        .await
        .unwrap();
    assert!(toggled.success);
    assert!(toggled.result.contains("paused"));

    let active_only = registry
        .execute("list_automation_rules", json!({"active_only": true}))
        .await
        .unwrap();
    assert_eq!(active_only.result, "No automation rules found.");

    let deleted = registry
        .execute("delete_automation_rule", json!({"rule_id": rule_id}))
        .await
        .unwrap();
    assert!(deleted.success);

    let empty = registry
        .execute("list_automation_rules", json!({}))
        .await
        .unwrap();
    assert_eq!(empty.result, "No automation rules found.");
}

#[tokio::test]
async fn inference_failure_is_a_readable_tool_result_not_an_error() {
    let registry = setup();

    let result = registry
        .execute(
            "create_automation_rule",
            json!({
                "name": "vague",
                "description": "Auto-assign printer issues to John"
            }),
        )
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.result.contains("Try phrases like"));
}
