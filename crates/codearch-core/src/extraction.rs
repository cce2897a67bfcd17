//! Validation of whole extraction documents.
//!
//! An analyzer answers the extraction prompt with a JSON document of the form
//! `{"entities": [{"entity_type": "Component", "name": ..., ...}, ...]}`.
//! Each entry is validated on its own; a bad entry never takes the others
//! down with it.

use serde_json::Value;
use tracing::debug;

use crate::error::{json_type_name, SchemaError};
use crate::ontology::{EntityKind, GraphEntity};
use crate::registry::EntityRegistry;
use crate::schema::ValidationPolicy;

/// Key holding the entity list in an extraction document.
pub const ENTITIES_KEY: &str = "entities";

/// An entry that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntity {
    /// Position in the document's entity list
    pub index: usize,
    /// The `name` the entry claimed, if it had a string one
    pub name: Option<String>,
    pub error: SchemaError,
}

/// Outcome of validating an extraction document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub accepted: Vec<GraphEntity>,
    pub rejected: Vec<RejectedEntity>,
}

impl ExtractionReport {
    /// Returns true if every entry validated.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Total number of entries seen.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Accepted entities of one kind.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &GraphEntity> {
        self.accepted.iter().filter(move |entity| entity.kind() == kind)
    }

    /// Accepted entities whose `name` repeats an earlier one of the same kind.
    ///
    /// Names are the identity key of a kind, so the graph layer will merge
    /// these into a single node.
    pub fn duplicate_names(&self) -> Vec<(EntityKind, &str)> {
        let mut seen = std::collections::HashSet::new();
        self.accepted
            .iter()
            .filter(|entity| !seen.insert((entity.kind(), entity.name())))
            .map(|entity| (entity.kind(), entity.name()))
            .collect()
    }
}

/// Validate every entry of an extraction document.
///
/// Fails only when the document itself is malformed; per-entry failures are
/// reported in [`ExtractionReport::rejected`].
pub fn validate_extraction(
    document: &Value,
    policy: &ValidationPolicy,
) -> Result<ExtractionReport, SchemaError> {
    let object = document.as_object().ok_or(SchemaError::NotAnObject {
        found: json_type_name(document),
    })?;
    let entries = object
        .get(ENTITIES_KEY)
        .ok_or_else(|| {
            SchemaError::MalformedDocument(format!("missing '{}' list", ENTITIES_KEY))
        })?
        .as_array()
        .ok_or_else(|| {
            SchemaError::MalformedDocument(format!("'{}' must be a list", ENTITIES_KEY))
        })?;

    let registry = EntityRegistry::new();
    let mut report = ExtractionReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match registry.validate_tagged(entry, policy) {
            Ok(entity) => report.accepted.push(entity),
            Err(error) => {
                let name = entry
                    .get(crate::schema::field::NAME)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                report.rejected.push(RejectedEntity { index, name, error });
            }
        }
    }

    debug!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "validated extraction document"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_document() {
        let document = json!({
            "entities": [
                {"entity_type": "Component", "name": "CLI Tool", "description": "Command line"},
                {"entity_type": "Feature", "name": "Project Init"},
                {"entity_type": "Widget", "name": "X", "description": "Y"},
                {"entity_type": "Concept", "name": "Knowledge Graph", "description": "Graph"},
            ]
        });

        let report = validate_extraction(&document, &ValidationPolicy::default()).unwrap();
        assert_eq!(report.total(), 4);
        assert_eq!(report.accepted.len(), 2);
        assert!(!report.is_clean());

        assert_eq!(report.rejected[0].index, 1);
        assert_eq!(report.rejected[0].name.as_deref(), Some("Project Init"));
        let validation = report.rejected[0].error.as_validation().unwrap();
        assert_eq!(validation.missing_fields(), vec!["description"]);

        assert_eq!(report.rejected[1].index, 2);
        assert!(matches!(report.rejected[1].error, SchemaError::UnknownKind(_)));
    }

    #[test]
    fn test_duplicate_names() {
        let document = json!({
            "entities": [
                {"entity_type": "Module", "name": "Parser", "description": "a"},
                {"entity_type": "Component", "name": "Parser", "description": "b"},
                {"entity_type": "Module", "name": "Parser", "description": "c"},
            ]
        });

        let report = validate_extraction(&document, &ValidationPolicy::default()).unwrap();
        assert_eq!(report.duplicate_names(), vec![(EntityKind::Module, "Parser")]);
        assert_eq!(report.of_kind(EntityKind::Module).count(), 2);
    }

    #[test]
    fn test_malformed_documents() {
        let policy = ValidationPolicy::default();
        assert!(matches!(
            validate_extraction(&json!({"nodes": []}), &policy),
            Err(SchemaError::MalformedDocument(_))
        ));
        assert!(matches!(
            validate_extraction(&json!({"entities": {}}), &policy),
            Err(SchemaError::MalformedDocument(_))
        ));
        assert_eq!(
            validate_extraction(&json!("entities"), &policy),
            Err(SchemaError::NotAnObject { found: "string" })
        );
    }
}
