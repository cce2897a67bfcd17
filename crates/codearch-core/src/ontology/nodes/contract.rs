//! Contract entity nodes: Interfaces, Resources.
//!
//! These sit at the boundaries of the system, either between two of its
//! parts (Interface) or between the system and something it consumes
//! (Resource).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GraphEntity;
use crate::ontology::{Entity, EntityBase, EntityKind};
use crate::schema::{field, NormalizedFields};

// =============================================================================
// INTERFACE ENTITY
// =============================================================================

/// A defined way for Components or Modules to interact.
///
/// REST APIs, protocols, CLI command sets and function contracts all map
/// here. Which component exposes it is an EXPOSES edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntity {
    #[serde(flatten)]
    pub base: EntityBase,

    /// Data or parameters crossing the boundary, as free text
    #[serde(default)]
    pub parameters: String,
}

impl InterfaceEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
            parameters: String::new(),
        }
    }

    /// Set the parameter description.
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
            parameters: fields.take(field::PARAMETERS),
        }
    }
}

impl Entity for InterfaceEntity {
    const KIND: EntityKind = EntityKind::Interface;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn write_extra_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert(
            field::PARAMETERS.to_string(),
            Value::String(self.parameters.clone()),
        );
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Interface(self)
    }
}

// =============================================================================
// RESOURCE ENTITY
// =============================================================================

/// An external dependency or asset: a library, service, database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntity {
    #[serde(flatten)]
    pub base: EntityBase,

    /// Version information, if any
    #[serde(default)]
    pub version: String,

    /// How the resource is accessed or integrated
    #[serde(default)]
    pub access_method: String,
}

impl ResourceEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name, description),
            version: String::new(),
            access_method: String::new(),
        }
    }

    /// Set the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the access method.
    pub fn with_access_method(mut self, access_method: impl Into<String>) -> Self {
        self.access_method = access_method.into();
        self
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            base: EntityBase::from_normalized(fields),
            version: fields.take(field::VERSION),
            access_method: fields.take(field::ACCESS_METHOD),
        }
    }
}

impl Entity for ResourceEntity {
    const KIND: EntityKind = EntityKind::Resource;

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn write_extra_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert(field::VERSION.to_string(), Value::String(self.version.clone()));
        fields.insert(
            field::ACCESS_METHOD.to_string(),
            Value::String(self.access_method.clone()),
        );
    }

    fn into_graph_entity(self) -> GraphEntity {
        GraphEntity::Resource(self)
    }
}
