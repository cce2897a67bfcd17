//! Schema error types.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::ontology::EntityKind;

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// A required field was absent or null
    Missing,
    /// The field was present but not a string
    WrongType { found: &'static str },
    /// The field is not part of the kind's shape
    Unrecognized,
    /// The status is outside the documented set (strict status policy only)
    InvalidStatus { value: String },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing required field"),
            Self::WrongType { found } => write!(f, "expected string, found {}", found),
            Self::Unrecognized => f.write_str("not a recognized field"),
            Self::InvalidStatus { value } => write!(
                f,
                "unknown status '{}', expected active, deprecated or planned",
                value
            ),
        }
    }
}

/// A problem attached to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub problem: FieldProblem,
}

impl FieldIssue {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: FieldProblem::Missing,
        }
    }

    pub fn wrong_type(field: impl Into<String>, value: &Value) -> Self {
        Self {
            field: field.into(),
            problem: FieldProblem::WrongType {
                found: json_type_name(value),
            },
        }
    }

    pub fn unrecognized(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: FieldProblem::Unrecognized,
        }
    }

    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self {
            field: crate::schema::field::STATUS.to_string(),
            problem: FieldProblem::InvalidStatus {
                value: value.into(),
            },
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// A candidate record failed the shape of its kind.
///
/// Carries every offending field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} entity: {}", join_issues(.issues))]
pub struct SchemaValidationError {
    pub kind: EntityKind,
    pub issues: Vec<FieldIssue>,
}

impl SchemaValidationError {
    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }

    /// Names of the required fields that were missing.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.problem == FieldProblem::Missing)
            .map(|issue| issue.field.as_str())
            .collect()
    }

    /// Returns true if `field` is named by any issue.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A kind name that is not one of the six registered kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

/// Errors from name-driven schema operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The record does not match its kind's shape.
    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    /// The kind name is not registered.
    #[error(transparent)]
    UnknownKind(#[from] UnknownEntityKind),

    /// A tagged record carried no `entity_type` field.
    #[error("Missing entity_type tag")]
    MissingEntityType,

    /// The `entity_type` tag was present but not a string.
    #[error("Expected entity_type to be a string, found {found}")]
    InvalidEntityType { found: &'static str },

    /// The `entity_type` tag names a different kind than the one requested.
    #[error("Entity tagged as {found} cannot be validated as {expected}")]
    KindMismatch { expected: EntityKind, found: String },

    /// A record or document was not a JSON object.
    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// An extraction document did not have the expected layout.
    #[error("Malformed extraction document: {0}")]
    MalformedDocument(String),
}

impl SchemaError {
    /// Returns the validation error, if this is one.
    pub fn as_validation(&self) -> Option<&SchemaValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_message_lists_every_issue() {
        let err = SchemaValidationError {
            kind: EntityKind::Resource,
            issues: vec![
                FieldIssue::missing("description"),
                FieldIssue::wrong_type("version", &json!(2)),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid Resource entity: description: missing required field; \
             version: expected string, found number"
        );
        assert_eq!(err.fields(), vec!["description", "version"]);
        assert_eq!(err.missing_fields(), vec!["description"]);
    }

    #[test]
    fn test_unknown_kind_message() {
        let err: SchemaError = UnknownEntityKind("NotAKind".to_string()).into();
        assert_eq!(err.to_string(), "Unknown entity kind: NotAKind");
        assert!(err.as_validation().is_none());
    }
}
