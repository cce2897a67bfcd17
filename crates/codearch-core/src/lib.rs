//! Entity schema for CodeArch architecture knowledge graphs.
//!
//! An extraction pipeline turns source code and documentation into nodes of
//! six kinds (Component, Module, Interface, Feature, Resource, Concept). This
//! crate owns the shape of those nodes: the records themselves, the schema
//! each kind is validated against, and the registry that resolves a kind by
//! name. Edges, storage and querying belong to the graph layer that consumes
//! the validated records.
//!
//! # Example
//!
//! ```
//! use codearch_core::{registry, GraphEntity};
//! use serde_json::json;
//!
//! let fields = json!({
//!     "name": "MCP Protocol",
//!     "description": "Agent-tool comms",
//!     "parameters": "JSON-RPC messages",
//! });
//!
//! let entity = registry::validate("Interface", fields.as_object().unwrap()).unwrap();
//! assert_eq!(entity.base().status, "active");
//! assert!(matches!(entity, GraphEntity::Interface(_)));
//! ```

pub mod config;
pub mod error;
pub mod extraction;
pub mod guidance;
pub mod ontology;
pub mod prompts;
pub mod registry;
pub mod schema;

pub use config::{Config, ConfigError, PromptConfig};
pub use error::{FieldIssue, FieldProblem, SchemaError, SchemaValidationError, UnknownEntityKind};
pub use extraction::{validate_extraction, ExtractionReport, RejectedEntity};
pub use ontology::{
    ComponentEntity, ConceptEntity, Entity, EntityBase, EntityKind, FeatureEntity, GraphEntity,
    InterfaceEntity, ModuleEntity, ResourceEntity,
};
pub use registry::EntityRegistry;
pub use schema::{
    FieldSpec, NodeShape, NodeStyle, SchemaDefinition, StatusPolicy, UnknownFieldPolicy,
    ValidationPolicy,
};
