//! Instance records - A single running occurrence of an installed application

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix applied when rendering an instance identifier
const ID_PREFIX: &str = "proc-";

/// Unique identifier for a running instance
///
/// Generated by the registry from a random 128-bit UUID; never supplied by
/// callers and never reused, even after the instance is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

impl FromStr for InstanceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the prefixed form is valid; a bare UUID was never issued.
        let raw = s.strip_prefix(ID_PREFIX).unwrap_or("");
        Uuid::parse_str(raw).map(Self)
    }
}

/// A currently running instance of an installed application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Unique identifier
    pub id: InstanceId,
    /// Catalog key of the application this instance runs
    pub app_id: String,
    /// Display name of the application, captured at launch time
    pub app_name: String,
    /// When the instance was launched
    pub launched_at: DateTime<Utc>,
}

impl Instance {
    pub fn new(app_id: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            id: InstanceId::new(),
            app_id: app_id.into(),
            app_name: app_name.into(),
            launched_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Process ID: {})", self.app_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = InstanceId::new();
        let rendered = id.to_string();
        assert!(rendered.starts_with("proc-"));

        let parsed: InstanceId = rendered.parse().expect("prefixed form should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn bare_uuid_is_rejected() {
        let bare = Uuid::new_v4().to_string();
        assert!(bare.parse::<InstanceId>().is_err());
    }

    #[test]
    fn fresh_ids_are_distinct() {
        let a = InstanceId::new();
        let b = InstanceId::new();
        assert_ne!(a, b);
    }
}
