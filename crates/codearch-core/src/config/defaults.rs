//! Default values for CodeArch configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

use crate::schema::{StatusPolicy, UnknownFieldPolicy};

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const DEFAULT_CONFIG_FILE: &str = "codearch.toml";

/// Directory under the user config dir holding the user config.
pub const DEFAULT_USER_CONFIG_DIR: &str = "codearch";

/// User config file name.
pub const DEFAULT_USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Validation Defaults
// ============================================================================

/// Unknown fields are rejected, keeping the graph schema closed.
pub const DEFAULT_UNKNOWN_FIELD_POLICY: UnknownFieldPolicy = UnknownFieldPolicy::Reject;

/// Status is free text unless configured otherwise.
pub const DEFAULT_STATUS_POLICY: StatusPolicy = StatusPolicy::Open;

// ============================================================================
// Prompt Defaults
// ============================================================================

/// Include sample entities in extraction prompts.
pub const DEFAULT_INCLUDE_EXAMPLES: bool = true;

/// Maximum size of source text embedded in a prompt (100 KB).
pub const DEFAULT_MAX_SOURCE_SIZE: usize = 100 * 1024;

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_UNKNOWN_FIELDS: &str = "CODEARCH_UNKNOWN_FIELDS";
pub const ENV_STATUS_POLICY: &str = "CODEARCH_STATUS_POLICY";
pub const ENV_PROMPT_EXAMPLES: &str = "CODEARCH_PROMPT_EXAMPLES";
pub const ENV_MAX_SOURCE_SIZE: &str = "CODEARCH_MAX_SOURCE_SIZE";
