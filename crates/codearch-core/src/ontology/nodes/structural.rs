//! Structural entity nodes: Components, Modules.
//!
//! These describe how the system is carved up. Neither kind adds fields to
//! the base contract; containment (Component CONTAINS Module) is an edge.

use serde::{Deserialize, Serialize};

use super::GraphEntity;
use crate::ontology::{Entity, EntityBase, EntityKind};
use crate::schema::NormalizedFields;

// =============================================================================
// COMPONENT ENTITY
// =============================================================================

/// A distinct functional part of the system.
///
/// Components are the large-scale units ("CLI Tool", "MCP Server") that own
/// a clear responsibility and are usually made of several modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntity {
    #[serde(flatten)]
    pub base: EntityBase,
}

impl ComponentEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
        }
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
        }
    }
}

impl Entity for ComponentEntity {
    const KIND: EntityKind = EntityKind::Component;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Component(self)
    }
}

// =============================================================================
// MODULE ENTITY
// =============================================================================

/// A cohesive grouping of related code, contained within a Component.
///
/// Finer grained than a Component, coarser than a single type or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntity {
    #[serde(flatten)]
    pub base: EntityBase,
}

impl ModuleEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
        }
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
        }
    }
}

impl Entity for ModuleEntity {
    const KIND: EntityKind = EntityKind::Module;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Module(self)
    }
}
