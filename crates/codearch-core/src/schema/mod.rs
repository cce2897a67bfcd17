//! Schema definitions for the entity kinds.
//!
//! A [`SchemaDefinition`] describes one kind: its field table (base contract
//! followed by the kind's own fields), the default of every optional field,
//! and presentation metadata used when rendering prompts and graphs.
//! Validation lives in [`validator`].

mod policy;
mod style;
mod validator;

pub use policy::*;
pub use style::*;

use std::collections::HashMap;

use crate::guidance::KindGuidance;
use crate::ontology::{EntityKind, STATUS_ACTIVE};

/// Field names used across the schema.
pub mod field {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const STATUS: &str = "status";
    pub const CREATED_AT: &str = "created_at";
    pub const MODIFIED_AT: &str = "modified_at";
    pub const RESPONSIBILITY: &str = "responsibility";
    pub const MAINTAINER: &str = "maintainer";

    pub const PARAMETERS: &str = "parameters";
    pub const USER_BENEFIT: &str = "user_benefit";
    pub const VERSION: &str = "version";
    pub const ACCESS_METHOD: &str = "access_method";
    pub const RELATED_CONCEPTS: &str = "related_concepts";
}

/// One field of an entity schema. Every field is textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name
    pub name: &'static str,
    /// Whether the field must be supplied
    pub required: bool,
    /// Value used when an optional field is absent
    pub default: &'static str,
    /// What the field holds
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: true,
            default: "",
            description,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: "",
            description,
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }
}

/// The base contract, in declaration order.
pub const BASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(field::NAME, "Unique identifier within its entity kind"),
    FieldSpec::required(field::DESCRIPTION, "Human-readable explanation"),
    FieldSpec::optional(field::STATUS, "Current state (active, deprecated, planned)")
        .with_default(STATUS_ACTIVE),
    FieldSpec::optional(field::CREATED_AT, "When this entity was added to the system"),
    FieldSpec::optional(field::MODIFIED_AT, "When this entity was last modified"),
    FieldSpec::optional(field::RESPONSIBILITY, "Primary purpose in the system"),
    FieldSpec::optional(field::MAINTAINER, "Team or individual responsible for this entity"),
];

/// The shape of one entity kind.
#[derive(Debug)]
pub struct SchemaDefinition {
    /// Kind described by this schema
    pub kind: EntityKind,
    /// One-line summary of what the kind represents
    pub summary: &'static str,
    /// Fields added on top of [`BASE_FIELDS`]
    pub extra_fields: &'static [FieldSpec],
    /// How graph explorers draw nodes of this kind
    pub style: NodeStyle,
    /// How to recognize instances of this kind in a codebase
    pub guidance: &'static KindGuidance,
}

impl SchemaDefinition {
    /// Kind name.
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// All fields: the base contract followed by the kind's own fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        BASE_FIELDS.iter().chain(self.extra_fields.iter())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|spec| spec.name == name)
    }

    /// Returns true if `name` is part of this kind's shape.
    pub fn accepts(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Names of the fields that must be supplied.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
            .collect()
    }

    /// Names of every field, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields().map(|spec| spec.name).collect()
    }
}

/// Field values after validation: every field of the schema is present.
#[derive(Debug, Default)]
pub(crate) struct NormalizedFields {
    values: HashMap<&'static str, String>,
}

impl NormalizedFields {
    pub(crate) fn insert(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Move a value out. Fields the validator did not populate come back
    /// empty.
    pub(crate) fn take(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }
}
