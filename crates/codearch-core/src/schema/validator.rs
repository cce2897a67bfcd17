//! Validation of candidate field mappings against a schema.

use serde_json::{Map, Value};
use tracing::debug;

use super::{
    field, NormalizedFields, SchemaDefinition, StatusPolicy, UnknownFieldPolicy, ValidationPolicy,
};
use crate::error::{FieldIssue, SchemaValidationError};
use crate::ontology::{GraphEntity, KNOWN_STATUSES};

impl SchemaDefinition {
    /// Validate a candidate record with the default policy.
    ///
    /// `name` and `description` must be strings; every other recognized
    /// field must be a string when present and falls back to its default
    /// when absent. A JSON `null` counts as absent.
    pub fn validate(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<GraphEntity, SchemaValidationError> {
        self.validate_with(fields, &ValidationPolicy::default())
    }

    /// Validate a candidate record with an explicit policy.
    ///
    /// All issues are collected before failing. On success the returned
    /// record has every field of the kind populated.
    pub fn validate_with(
        &self,
        fields: &Map<String, Value>,
        policy: &ValidationPolicy,
    ) -> Result<GraphEntity, SchemaValidationError> {
        let mut issues = Vec::new();
        let mut normalized = NormalizedFields::default();

        for spec in self.fields() {
            match fields.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        issues.push(FieldIssue::missing(spec.name));
                    } else {
                        normalized.insert(spec.name, spec.default.to_string());
                    }
                }
                Some(Value::String(value)) => normalized.insert(spec.name, value.clone()),
                Some(other) => issues.push(FieldIssue::wrong_type(spec.name, other)),
            }
        }

        for key in fields.keys().filter(|key| !self.accepts(key)) {
            match policy.unknown_fields {
                UnknownFieldPolicy::Reject => issues.push(FieldIssue::unrecognized(key.as_str())),
                UnknownFieldPolicy::Ignore => {
                    debug!(kind = %self.kind, field = %key, "dropping unrecognized field");
                }
            }
        }

        if policy.status == StatusPolicy::Strict {
            if let Some(status) = normalized.get(field::STATUS) {
                if !KNOWN_STATUSES.contains(&status) {
                    issues.push(FieldIssue::invalid_status(status));
                }
            }
        }

        if !issues.is_empty() {
            let err = SchemaValidationError {
                kind: self.kind,
                issues,
            };
            debug!(kind = %self.kind, error = %err, "rejected candidate entity");
            return Err(err);
        }

        Ok(GraphEntity::from_normalized(self.kind, &mut normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldProblem;
    use crate::registry::EntityRegistry;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_collects_every_issue() {
        let schema = EntityRegistry::new().lookup("Resource").unwrap();
        let fields = object(json!({
            "version": 3,
            "owner": "infra",
        }));

        let err = schema.validate(&fields).unwrap_err();
        assert_eq!(err.kind, crate::ontology::EntityKind::Resource);
        assert_eq!(err.fields(), vec!["name", "description", "version", "owner"]);
        assert_eq!(
            err.issues[2].problem,
            FieldProblem::WrongType { found: "number" }
        );
        assert_eq!(err.issues[3].problem, FieldProblem::Unrecognized);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let schema = EntityRegistry::new().lookup("Module").unwrap();

        let entity = schema
            .validate(&object(json!({
                "name": "Command Processor",
                "description": "Parses CLI commands",
                "maintainer": null,
            })))
            .unwrap();
        assert_eq!(entity.base().maintainer, "");

        let err = schema
            .validate(&object(json!({"name": null, "description": "x"})))
            .unwrap_err();
        assert_eq!(err.missing_fields(), vec!["name"]);
    }

    #[test]
    fn test_empty_strings_satisfy_required_fields() {
        let schema = EntityRegistry::new().lookup("Concept").unwrap();
        let entity = schema
            .validate(&object(json!({"name": "", "description": ""})))
            .unwrap();
        assert_eq!(entity.name(), "");
    }

    #[test]
    fn test_strict_status() {
        let schema = EntityRegistry::new().lookup("Component").unwrap();
        let fields = object(json!({
            "name": "CLI Tool",
            "description": "Command-line interface",
            "status": "retired",
        }));

        assert!(schema.validate(&fields).is_ok());

        let err = schema
            .validate_with(&fields, &ValidationPolicy::strict())
            .unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::invalid_status("retired")]);
    }

    #[test]
    fn test_strict_status_accepts_default() {
        let schema = EntityRegistry::new().lookup("Feature").unwrap();
        let fields = object(json!({"name": "Project Init", "description": "Create new project"}));
        let entity = schema
            .validate_with(&fields, &ValidationPolicy::strict())
            .unwrap();
        assert_eq!(entity.base().status, "active");
    }

    #[test]
    fn test_ignore_policy_drops_unknown_fields() {
        let schema = EntityRegistry::new().lookup("Interface").unwrap();
        let fields = object(json!({
            "name": "Docker API",
            "description": "Talks to the Docker daemon",
            "user_benefit": "not an interface field",
        }));

        let err = schema.validate(&fields).unwrap_err();
        assert_eq!(err.fields(), vec!["user_benefit"]);

        let entity = schema
            .validate_with(&fields, &ValidationPolicy::lenient())
            .unwrap();
        assert!(!entity.to_fields().contains_key("user_benefit"));
    }
}
