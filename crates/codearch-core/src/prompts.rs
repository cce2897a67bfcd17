//! Extraction prompts built from the registry.
//!
//! Nothing here talks to a model; these functions only render the text an
//! extraction pipeline sends.

use std::fmt::Write;

use crate::config::PromptConfig;
use crate::registry::EntityRegistry;
use crate::schema::SchemaDefinition;

/// System prompt for entity extraction.
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are a software architect building an architecture knowledge graph of a codebase.

Your task is to read the provided source code and documentation and identify the architectural entities it contains. Every entity belongs to exactly one of the entity kinds described below.

Rules:
1. Use only the kinds listed, spelled exactly as shown
2. Every entity needs a "name" and a "description"
3. Use only the fields listed for the entity's kind; every value is a string
4. A name identifies an entity within its kind, so reuse the same name when you mean the same entity
5. Do not describe relationships between entities; they are recorded separately

IMPORTANT: Output your analysis as valid JSON matching this exact structure:
{
  "entities": [
    {
      "entity_type": "Component",
      "name": "Entity name",
      "description": "What this entity is"
    }
  ]
}

Only output the JSON, no additional text."#;

/// Returns the configured system prompt, falling back to the built-in one.
pub fn system_prompt(config: &PromptConfig) -> &str {
    config
        .system_prompt
        .as_deref()
        .unwrap_or(EXTRACTION_SYSTEM_PROMPT)
}

/// Renders one kind: summary, fields and identification hints.
pub fn render_kind(schema: &SchemaDefinition, include_examples: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "### {}", schema.name());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}.", schema.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Fields:");
    for spec in schema.fields() {
        let requirement = if spec.required {
            "required".to_string()
        } else if spec.default.is_empty() {
            "optional".to_string()
        } else {
            format!("optional, default \"{}\"", spec.default)
        };
        let _ = writeln!(out, "- `{}` ({}): {}", spec.name, requirement, spec.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "How to identify:");
    for (i, instruction) in schema.guidance.instructions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, instruction);
    }

    if include_examples && !schema.guidance.examples.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Examples:");
        for example in schema.guidance.examples {
            let _ = writeln!(out, "- \"{}\" - {}", example.name, example.description);
        }
    }

    out
}

/// Renders every registered kind, in canonical order.
pub fn render_kind_catalog(include_examples: bool) -> String {
    EntityRegistry::new()
        .schemas()
        .iter()
        .map(|schema| render_kind(schema, include_examples))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cuts `source` down to at most `max_size` bytes on a character boundary.
fn truncate_source(source: &str, max_size: usize) -> (&str, bool) {
    if source.len() <= max_size {
        return (source, false);
    }
    let mut end = max_size;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    (&source[..end], true)
}

/// Builds the user prompt for extracting entities from `source`.
///
/// Source text beyond [`PromptConfig::max_source_size`] is cut off and
/// marked as truncated.
pub fn build_extraction_prompt(config: &PromptConfig, source: &str) -> String {
    let (source, truncated) = truncate_source(source, config.max_source_size);
    let source = if truncated {
        format!("{}\n... (truncated)", source)
    } else {
        source.to_string()
    };
    let catalog = render_kind_catalog(config.include_examples);
    let kinds = EntityRegistry::new().list_kinds().join(", ");

    format!(
        r#"## Entity Kinds

Valid kinds: {kinds}

{catalog}
## Source

{source}

Identify the architectural entities in this source. Return them using the JSON structure from the instructions."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;

    #[test]
    fn test_render_kind_lists_fields() {
        let schema = lookup("Resource").unwrap();
        let text = render_kind(schema, false);
        assert!(text.starts_with("### Resource\n"));
        assert!(text.contains("- `name` (required)"));
        assert!(text.contains("- `status` (optional, default \"active\")"));
        assert!(text.contains("- `version` (optional)"));
        assert!(text.contains("- `access_method` (optional)"));
        assert!(!text.contains("Examples:"));
    }

    #[test]
    fn test_render_kind_examples() {
        let schema = lookup("Interface").unwrap();
        let text = render_kind(schema, true);
        assert!(text.contains("Examples:"));
        assert!(text.contains("\"MCP Protocol\""));
        assert!(!text.contains("user_benefit"));
    }

    #[test]
    fn test_build_extraction_prompt() {
        let config = PromptConfig::default();
        let prompt = build_extraction_prompt(&config, "fn main() {}");
        assert!(prompt.contains(
            "Valid kinds: Component, Module, Interface, Feature, Resource, Concept"
        ));
        assert!(prompt.contains("### Concept"));
        assert!(prompt.contains("fn main() {}"));
        assert!(!prompt.contains("(truncated)"));
    }

    #[test]
    fn test_truncates_long_source() {
        let config = PromptConfig {
            max_source_size: 4,
            ..Default::default()
        };
        let prompt = build_extraction_prompt(&config, "héllo world");
        assert!(prompt.contains("hél\n... (truncated)"));
    }

    #[test]
    fn test_system_prompt_override() {
        let mut config = PromptConfig::default();
        assert_eq!(system_prompt(&config), EXTRACTION_SYSTEM_PROMPT);

        config.system_prompt = Some("Custom".to_string());
        assert_eq!(system_prompt(&config), "Custom");
    }
}
