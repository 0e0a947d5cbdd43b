//! Catalog store - The authoritative mapping of installed applications

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use tracing::info;

use super::app::Application;

/// Outcome of an install call
///
/// Re-installing a known app is an ordinary outcome, not an error; the
/// existing record is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

/// Thread-safe store of installed applications, keyed by app id
///
/// Cloning produces another handle to the same underlying map, so a store can
/// be shared across threads without external locking.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    apps: Arc<RwLock<HashMap<String, Application>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an application, leaving any existing record for the same id
    /// untouched
    ///
    /// The presence check and the insertion happen under a single write-lock
    /// hold, so concurrent installs of the same id resolve to exactly one
    /// `Installed` outcome.
    pub fn install(
        &self,
        app_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<InstallOutcome> {
        let app_id = app_id.into();
        let mut apps = self
            .apps
            .write()
            .map_err(|e| anyhow::anyhow!("Catalog lock poisoned: {}", e))?;

        if apps.contains_key(&app_id) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        let app = Application::new(app_id.clone(), display_name);
        info!("Installed app: {} ({})", app.display_name, app.app_id);
        apps.insert(app_id, app);
        Ok(InstallOutcome::Installed)
    }

    /// Look up an installed application by id
    pub fn lookup(&self, app_id: &str) -> Option<Application> {
        self.apps
            .read()
            .ok()
            .and_then(|apps| apps.get(app_id).cloned())
    }

    /// Snapshot of all installed applications, in no particular order
    pub fn list_all(&self) -> Result<Vec<Application>> {
        let apps = self
            .apps
            .read()
            .map_err(|e| anyhow::anyhow!("Catalog lock poisoned: {}", e))?;
        Ok(apps.values().cloned().collect())
    }

    /// Number of installed applications
    pub fn len(&self) -> usize {
        self.apps.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
