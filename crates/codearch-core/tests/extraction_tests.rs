use codearch_core::prompts::{build_extraction_prompt, system_prompt, EXTRACTION_SYSTEM_PROMPT};
use codearch_core::registry::EntityRegistry;
use codearch_core::{validate_extraction, EntityKind, GraphEntity, PromptConfig, ValidationPolicy};
use serde_json::json;

#[test]
fn test_prompt_lists_every_kind_and_field() {
    let prompt = build_extraction_prompt(&PromptConfig::default(), "# README");
    let registry = EntityRegistry::new();

    for schema in registry.schemas() {
        assert!(prompt.contains(&format!("### {}", schema.name())));
        for spec in schema.fields() {
            assert!(prompt.contains(&format!("`{}`", spec.name)));
        }
    }
    assert!(prompt.contains("Examples:"));
}

#[test]
fn test_prompt_without_examples() {
    let config = PromptConfig {
        include_examples: false,
        ..Default::default()
    };
    let prompt = build_extraction_prompt(&config, "# README");
    assert!(!prompt.contains("Examples:"));
    assert_eq!(system_prompt(&config), EXTRACTION_SYSTEM_PROMPT);
}

#[test]
fn test_model_output_round_trip() {
    let output = json!({
        "entities": [
            {
                "entity_type": "Component",
                "name": "MCP Server",
                "description": "Model Context Protocol server",
                "responsibility": "Serve graph queries to agents"
            },
            {
                "entity_type": "Interface",
                "name": "MCP Protocol",
                "description": "Agent-tool comms",
                "parameters": "JSON-RPC messages"
            },
            {
                "entity_type": "Resource",
                "name": "Neo4j Database",
                "description": "Graph database",
                "version": "5.x",
                "access_method": "Bolt driver"
            }
        ]
    });

    let report = validate_extraction(&output, &ValidationPolicy::default()).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.accepted.len(), 3);

    // Serialized records validate again as the same document.
    let reserialized = json!({ "entities": serde_json::to_value(&report.accepted).unwrap() });
    let again = validate_extraction(&reserialized, &ValidationPolicy::default()).unwrap();
    assert_eq!(again.accepted, report.accepted);

    let resources: Vec<&GraphEntity> = report.of_kind(EntityKind::Resource).collect();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].to_fields()["access_method"], "Bolt driver");
}

#[test]
fn test_strict_policy_rejects_unknown_status() {
    let output = json!({
        "entities": [
            {"entity_type": "Feature", "name": "Export", "description": "Export graph", "status": "beta"},
            {"entity_type": "Feature", "name": "Import", "description": "Import graph", "status": "planned"}
        ]
    });

    let lenient = validate_extraction(&output, &ValidationPolicy::default()).unwrap();
    assert!(lenient.is_clean());

    let strict = validate_extraction(&output, &ValidationPolicy::strict()).unwrap();
    assert_eq!(strict.accepted.len(), 1);
    assert_eq!(strict.rejected.len(), 1);
    assert_eq!(strict.rejected[0].name.as_deref(), Some("Export"));
}
