//! The base contract shared by every entity kind.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{field, NormalizedFields};

/// Lifecycle state of an entity that is in use.
pub const STATUS_ACTIVE: &str = "active";

/// Lifecycle state of an entity that is being phased out.
pub const STATUS_DEPRECATED: &str = "deprecated";

/// Lifecycle state of an entity that does not exist yet.
pub const STATUS_PLANNED: &str = "planned";

/// The documented lifecycle states. Only enforced under
/// [`StatusPolicy::Strict`](crate::schema::StatusPolicy::Strict).
pub const KNOWN_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_DEPRECATED, STATUS_PLANNED];

/// Fields carried by every entity kind.
///
/// Embedded (flattened) into each kind's record rather than inherited, so a
/// serialized record stays a single flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBase {
    /// Unique identifier within its kind
    pub name: String,

    /// Human-readable explanation
    pub description: String,

    /// Lifecycle state (active, deprecated, planned)
    #[serde(default = "default_status")]
    pub status: String,

    /// When the entity was added to the system
    #[serde(default)]
    pub created_at: String,

    /// When the entity was last modified
    #[serde(default)]
    pub modified_at: String,

    /// Primary purpose in the system
    #[serde(default)]
    pub responsibility: String,

    /// Team or individual responsible for the entity
    #[serde(default)]
    pub maintainer: String,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

impl EntityBase {
    /// Create a base with the required fields and every optional field at
    /// its default.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: default_status(),
            created_at: String::new(),
            modified_at: String::new(),
            responsibility: String::new(),
            maintainer: String::new(),
        }
    }

    /// Returns true if the status is `active`.
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Returns true if the status is one of [`KNOWN_STATUSES`].
    pub fn has_known_status(&self) -> bool {
        KNOWN_STATUSES.contains(&self.status.as_str())
    }

    /// Stamp both timestamps with the current time.
    pub fn mark_created(&mut self) {
        let now = timestamp_now();
        self.created_at = now.clone();
        self.modified_at = now;
    }

    /// Stamp `modified_at` with the current time.
    pub fn touch(&mut self) {
        self.modified_at = timestamp_now();
    }

    /// Replace the lifecycle state and record the modification.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.touch();
    }

    pub(crate) fn write_fields(&self, fields: &mut Map<String, Value>) {
        let entries = [
            (field::NAME, &self.name),
            (field::DESCRIPTION, &self.description),
            (field::STATUS, &self.status),
            (field::CREATED_AT, &self.created_at),
            (field::MODIFIED_AT, &self.modified_at),
            (field::RESPONSIBILITY, &self.responsibility),
            (field::MAINTAINER, &self.maintainer),
        ];
        for (key, value) in entries {
            fields.insert(key.to_string(), Value::String(value.clone()));
        }
    }

    pub(crate) fn from_normalized(fields: &mut NormalizedFields) -> Self {
        Self {
            name: fields.take(field::NAME),
            description: fields.take(field::DESCRIPTION),
            status: fields.take(field::STATUS),
            created_at: fields.take(field::CREATED_AT),
            modified_at: fields.take(field::MODIFIED_AT),
            responsibility: fields.take(field::RESPONSIBILITY),
            maintainer: fields.take(field::MAINTAINER),
        }
    }
}

/// RFC 3339 UTC timestamp, second precision.
fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
