//! Domain entity nodes: Features, Concepts.
//!
//! These capture what the system does for its users and the ideas needed to
//! understand it, independent of how the code is laid out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GraphEntity;
use crate::ontology::{Entity, EntityBase, EntityKind};
use crate::schema::{field, NormalizedFields};

// =============================================================================
// FEATURE ENTITY
// =============================================================================

/// A user-visible capability, implemented by one or more Components or
/// Modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntity {
    #[serde(flatten)]
    pub base: EntityBase,

    /// The value this feature delivers
    #[serde(default)]
    pub user_benefit: String,
}

impl FeatureEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
            user_benefit: String::new(),
        }
    }

    /// Set the user benefit.
    pub fn with_user_benefit(mut self, user_benefit: impl Into<String>) -> Self {
        self.user_benefit = user_benefit.into();
        self
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
            user_benefit: fields.take(field::USER_BENEFIT),
        }
    }
}

impl Entity for FeatureEntity {
    const KIND: EntityKind = EntityKind::Feature;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn write_extra_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert(
            field::USER_BENEFIT.to_string(),
            Value::String(self.user_benefit.clone()),
        );
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Feature(self)
    }
}

// =============================================================================
// CONCEPT ENTITY
// =============================================================================

/// An abstract or domain idea that explains the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntity {
    #[serde(flatten)]
    pub base: EntityBase,

    /// Names of related concepts, as free text
    #[serde(default)]
    pub related_concepts: String,
}

impl ConceptEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
            related_concepts: String::new(),
        }
    }

    /// Set the related concepts.
    pub fn with_related_concepts(mut self, related_concepts: impl Into<String>) -> Self {
        self.related_concepts = related_concepts.into();
        self
    }

    /// Split `related_concepts` into individual concept names.
    ///
    /// Accepts comma or semicolon separated lists; blank entries are skipped.
    pub fn related_concept_names(&self) -> Vec<&str> {
        self.related_concepts
            .split([',', ';'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
            related_concepts: fields.take(field::RELATED_CONCEPTS),
        }
    }
}

impl Entity for ConceptEntity {
    const KIND: EntityKind = EntityKind::Concept;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn write_extra_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert(
            field::RELATED_CONCEPTS.to_string(),
            Value::String(self.related_concepts.clone()),
        );
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Concept(self)
    }
}
