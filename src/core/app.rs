//! Application records - Entries in the installed catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An installed application as recorded in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Unique identifier, the catalog key
    pub app_id: String,
    /// Human-readable display name
    pub display_name: String,
    /// When the application was installed
    pub installed_at: DateTime<Utc>,
}

impl Application {
    pub fn new(app_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            display_name: display_name.into(),
            installed_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.display_name, self.app_id)
    }
}
