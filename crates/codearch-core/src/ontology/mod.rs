//! Architecture Graph Ontology
//!
//! Defines the node records an extraction pipeline produces when it maps a
//! codebase onto an architecture graph.
//!
//! ## Modules
//!
//! - `base` - The contract every kind carries (name, description, status,
//!   timestamps, responsibility, maintainer)
//! - `nodes/` - Entity records: Structural (Component, Module),
//!   Contract (Interface, Resource), Domain (Feature, Concept)
//!
//! ## Design Principles
//!
//! - Every kind embeds [`EntityBase`] and adds its own fields on top
//! - No kind shares another kind's extra fields
//! - Relationships are edges owned by the graph layer, keyed by `name`

mod base;
pub mod nodes;

pub use base::*;
pub use nodes::*;

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::UnknownEntityKind;

/// Common behaviour of the six entity records.
pub trait Entity: Send + Sync + Sized {
    /// The kind this record belongs to.
    const KIND: EntityKind;

    /// The shared base contract.
    fn base(&self) -> &EntityBase;

    /// Mutable access to the shared base contract.
    fn base_mut(&mut self) -> &mut EntityBase;

    /// Write the kind-specific fields into a field mapping.
    fn write_extra_fields(&self, _fields: &mut Map<String, Value>) {}

    /// Wrap this record in the unified [`GraphEntity`] enum.
    fn into_graph_entity(self) -> GraphEntity;

    /// The graph-node identity of this record within its kind.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// The normalized field mapping for this record.
    ///
    /// Feeding the result back into the kind's schema yields an identical
    /// record.
    fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        self.base().write_fields(&mut fields);
        self.write_extra_fields(&mut fields);
        fields
    }
}

/// The six node kinds of the architecture graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// A large architectural unit, such as a subsystem
    Component,
    /// A cohesive grouping of code inside a Component
    Module,
    /// A contract between Components or Modules
    Interface,
    /// A user-visible capability
    Feature,
    /// An external dependency: library, service, database
    Resource,
    /// An abstract or domain idea
    Concept,
}

impl EntityKind {
    /// All kinds in canonical order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Component,
        EntityKind::Module,
        EntityKind::Interface,
        EntityKind::Feature,
        EntityKind::Resource,
        EntityKind::Concept,
    ];

    /// Returns the kind name as used by producers and the graph layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Component => "Component",
            EntityKind::Module => "Module",
            EntityKind::Interface => "Interface",
            EntityKind::Feature => "Feature",
            EntityKind::Resource => "Resource",
            EntityKind::Concept => "Concept",
        }
    }

    /// Position of this kind in [`EntityKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}
