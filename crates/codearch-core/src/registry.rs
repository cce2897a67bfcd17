//! Registry of entity kinds.
//!
//! Maps kind names to their schema definitions so producers can construct
//! and validate records without hardcoding the kind list. The table is a
//! fixed literal; there is no runtime registration.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{json_type_name, SchemaError, UnknownEntityKind};
use crate::guidance;
use crate::ontology::{EntityKind, GraphEntity};
use crate::schema::{field, FieldSpec, NodeShape, NodeStyle, SchemaDefinition, ValidationPolicy};

/// Kind names in canonical order.
pub const KIND_NAMES: [&str; 6] = [
    "Component", "Module", "Interface", "Feature", "Resource", "Concept",
];

/// Field carrying the kind name in tagged records.
pub const ENTITY_TYPE_TAG: &str = "entity_type";

/// Schemas indexed by [`EntityKind::index`].
static SCHEMAS: [SchemaDefinition; 6] = [
    SchemaDefinition {
        kind: EntityKind::Component,
        summary: "A distinct functional part of the system",
        extra_fields: &[],
        style: NodeStyle {
            color: "#4285F4",
            shape: NodeShape::Ellipse,
            size: 40,
        },
        guidance: &guidance::COMPONENT,
    },
    SchemaDefinition {
        kind: EntityKind::Module,
        summary: "A grouping of related code files within a component",
        extra_fields: &[],
        style: NodeStyle {
            color: "#34A853",
            shape: NodeShape::RoundRectangle,
            size: 35,
        },
        guidance: &guidance::MODULE,
    },
    SchemaDefinition {
        kind: EntityKind::Interface,
        summary: "A defined way for components to interact",
        extra_fields: &[FieldSpec::optional(
            field::PARAMETERS,
            "Information about the interface parameters or data format",
        )],
        style: NodeStyle {
            color: "#FBBC05",
            shape: NodeShape::Diamond,
            size: 35,
        },
        guidance: &guidance::INTERFACE,
    },
    SchemaDefinition {
        kind: EntityKind::Feature,
        summary: "User-visible functionality or capability",
        extra_fields: &[FieldSpec::optional(
            field::USER_BENEFIT,
            "The value this feature provides to users",
        )],
        style: NodeStyle {
            color: "#EA4335",
            shape: NodeShape::Hexagon,
            size: 35,
        },
        guidance: &guidance::FEATURE,
    },
    SchemaDefinition {
        kind: EntityKind::Resource,
        summary: "An external dependency or asset",
        extra_fields: &[
            FieldSpec::optional(field::VERSION, "Version information if applicable"),
            FieldSpec::optional(
                field::ACCESS_METHOD,
                "How this resource is accessed or integrated",
            ),
        ],
        style: NodeStyle {
            color: "#9C27B0",
            shape: NodeShape::Octagon,
            size: 35,
        },
        guidance: &guidance::RESOURCE,
    },
    SchemaDefinition {
        kind: EntityKind::Concept,
        summary: "An important abstract idea in the system",
        extra_fields: &[FieldSpec::optional(
            field::RELATED_CONCEPTS,
            "Other concepts that are related to this one",
        )],
        style: NodeStyle {
            color: "#00ACC1",
            shape: NodeShape::Tag,
            size: 35,
        },
        guidance: &guidance::CONCEPT,
    },
];

/// Read-only view over the fixed kind table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityRegistry;

impl EntityRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Get the schema for a kind name. Names are case-sensitive.
    pub fn lookup(
        &self,
        kind_name: &str,
    ) -> Result<&'static SchemaDefinition, UnknownEntityKind> {
        trace!(kind = kind_name, "schema lookup");
        let kind: EntityKind = kind_name.parse()?;
        Ok(self.get(kind))
    }

    /// Get the schema for a kind.
    pub fn get(&self, kind: EntityKind) -> &'static SchemaDefinition {
        &SCHEMAS[kind.index()]
    }

    /// Check if a kind name is registered.
    pub fn contains(&self, kind_name: &str) -> bool {
        KIND_NAMES.contains(&kind_name)
    }

    /// List all kind names in canonical order.
    pub fn list_kinds(&self) -> &'static [&'static str] {
        &KIND_NAMES
    }

    /// All schemas in canonical order.
    pub fn schemas(&self) -> &'static [SchemaDefinition] {
        &SCHEMAS
    }

    /// Look up `kind_name` and validate `fields` against it.
    pub fn validate(
        &self,
        kind_name: &str,
        fields: &Map<String, Value>,
    ) -> Result<GraphEntity, SchemaError> {
        self.validate_with(kind_name, fields, &ValidationPolicy::default())
    }

    /// Look up `kind_name` and validate `fields` with an explicit policy.
    ///
    /// An `entity_type` tag naming the same kind is accepted and dropped, so
    /// a serialized [`GraphEntity`] validates again as its own kind. A tag
    /// naming another kind fails with [`SchemaError::KindMismatch`].
    pub fn validate_with(
        &self,
        kind_name: &str,
        fields: &Map<String, Value>,
        policy: &ValidationPolicy,
    ) -> Result<GraphEntity, SchemaError> {
        let schema = self.lookup(kind_name)?;
        let Some(tag) = fields.get(ENTITY_TYPE_TAG) else {
            return Ok(schema.validate_with(fields, policy)?);
        };

        let tagged_kind = tag_name(tag)?;
        if tagged_kind != schema.name() {
            return Err(SchemaError::KindMismatch {
                expected: schema.kind,
                found: tagged_kind.to_string(),
            });
        }

        let mut untagged = fields.clone();
        untagged.remove(ENTITY_TYPE_TAG);
        Ok(schema.validate_with(&untagged, policy)?)
    }

    /// Validate a record that names its own kind in `entity_type`.
    ///
    /// This is the serialized shape of [`GraphEntity`]; the tag itself is
    /// not treated as an unrecognized field.
    pub fn validate_tagged(
        &self,
        record: &Value,
        policy: &ValidationPolicy,
    ) -> Result<GraphEntity, SchemaError> {
        let object = record.as_object().ok_or(SchemaError::NotAnObject {
            found: json_type_name(record),
        })?;
        let tag = object
            .get(ENTITY_TYPE_TAG)
            .ok_or(SchemaError::MissingEntityType)?;

        self.validate_with(tag_name(tag)?, object, policy)
    }
}

fn tag_name(tag: &Value) -> Result<&str, SchemaError> {
    tag.as_str().ok_or(SchemaError::InvalidEntityType {
        found: json_type_name(tag),
    })
}

/// Get the schema for a kind name.
pub fn lookup(kind_name: &str) -> Result<&'static SchemaDefinition, UnknownEntityKind> {
    EntityRegistry.lookup(kind_name)
}

/// List all kind names in canonical order.
pub fn list_kinds() -> &'static [&'static str] {
    EntityRegistry.list_kinds()
}

/// Validate `fields` as an entity of `kind_name` with the default policy.
pub fn validate(kind_name: &str, fields: &Map<String, Value>) -> Result<GraphEntity, SchemaError> {
    EntityRegistry.validate(kind_name, fields)
}
