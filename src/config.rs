//! Builder options.
//!
//! Options are plain data with sensible defaults. Applications that keep
//! their settings in a JSON document can load them with
//! [`BuilderOptions::from_json`]; every field is optional there.
//!
//! ```
//! use realm_query_builder::config::{BuilderOptions, GroupPolicy, Spacing};
//!
//! let options = BuilderOptions::from_json(r#"{ "group_policy": "lenient" }"#).unwrap();
//! assert_eq!(options.group_policy, GroupPolicy::Lenient);
//! assert_eq!(options.spacing, Spacing::Compact);
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// How `end_group()` treats structurally invalid groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Closing a group that was never opened, or that holds no action, fails.
    #[default]
    Strict,
    /// Unbalanced markers are rendered as recorded.
    Lenient,
}

/// Whitespace around structural markers in the rendered predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// `a == $0 OR (NOT b == $1)`
    #[default]
    Compact,
    /// `a == $0 OR  (  NOT b == $1 ) `
    ///
    /// Every marker is padded with a space on both sides. Kept for stores
    /// and snapshots that compare predicate text produced by older builders.
    Padded,
}

/// Options carried by a builder and every builder derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    pub group_policy: GroupPolicy,
    pub spacing: Spacing,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_policy(mut self, policy: GroupPolicy) -> Self {
        self.group_policy = policy;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Parses options from a JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Json)
    }
}
