//! Node types for the architecture graph.
//!
//! Nodes are organized by what they describe:
//!
//! - **Structural**: Components, Modules
//! - **Contract**: Interfaces, Resources
//! - **Domain**: Features, Concepts

mod contract;
mod domain;
mod structural;

pub use contract::*;
pub use domain::*;
pub use structural::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Entity, EntityBase, EntityKind};
use crate::schema::NormalizedFields;

/// A unified node type that can hold any entity of the architecture graph.
///
/// Serializes as a flat object tagged with `entity_type`, which is the shape
/// handed to the graph layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity_type")]
pub enum GraphEntity {
    // === Structural Nodes ===
    /// A functional part of the system
    Component(ComponentEntity),
    /// A grouping of related code within a component
    Module(ModuleEntity),

    // === Contract Nodes ===
    /// A contract between components or modules
    Interface(InterfaceEntity),
    /// An external dependency or service
    Resource(ResourceEntity),

    // === Domain Nodes ===
    /// A user-facing capability
    Feature(FeatureEntity),
    /// A domain concept or design pattern
    Concept(ConceptEntity),
}

impl GraphEntity {
    /// Build the record for `kind` from a fully normalized field set.
    pub(crate) fn from_normalized(kind: EntityKind, fields: &mut NormalizedFields) -> Self {
        match kind {
            EntityKind::Component => Self::Component(ComponentEntity::from_normalized(fields)),
            EntityKind::Module => Self::Module(ModuleEntity::from_normalized(fields)),
            EntityKind::Interface => Self::Interface(InterfaceEntity::from_normalized(fields)),
            EntityKind::Feature => Self::Feature(FeatureEntity::from_normalized(fields)),
            EntityKind::Resource => Self::Resource(ResourceEntity::from_normalized(fields)),
            EntityKind::Concept => Self::Concept(ConceptEntity::from_normalized(fields)),
        }
    }

    /// Get the kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Component(_) => EntityKind::Component,
            Self::Module(_) => EntityKind::Module,
            Self::Interface(_) => EntityKind::Interface,
            Self::Feature(_) => EntityKind::Feature,
            Self::Resource(_) => EntityKind::Resource,
            Self::Concept(_) => EntityKind::Concept,
        }
    }

    /// Get a human-readable type name.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Get the shared base contract.
    pub fn base(&self) -> &EntityBase {
        match self {
            Self::Component(n) => &n.base,
            Self::Module(n) => &n.base,
            Self::Interface(n) => &n.base,
            Self::Feature(n) => &n.base,
            Self::Resource(n) => &n.base,
            Self::Concept(n) => &n.base,
        }
    }

    /// Get mutable access to the shared base contract.
    pub fn base_mut(&mut self) -> &mut EntityBase {
        match self {
            Self::Component(n) => &mut n.base,
            Self::Module(n) => &mut n.base,
            Self::Interface(n) => &mut n.base,
            Self::Feature(n) => &mut n.base,
            Self::Resource(n) => &mut n.base,
            Self::Concept(n) => &mut n.base,
        }
    }

    /// Get the graph-node identity of this entity within its kind.
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Get the normalized field mapping, without the `entity_type` tag.
    pub fn to_fields(&self) -> Map<String, Value> {
        match self {
            Self::Component(n) => n.to_fields(),
            Self::Module(n) => n.to_fields(),
            Self::Interface(n) => n.to_fields(),
            Self::Feature(n) => n.to_fields(),
            Self::Resource(n) => n.to_fields(),
            Self::Concept(n) => n.to_fields(),
        }
    }
}
