//! Instance registry - The table of currently running instances

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use tracing::info;

use super::instance::{Instance, InstanceId};

/// Thread-safe table of running instances, keyed by generated instance id
///
/// Identifiers are drawn from a random 128-bit generator and are never reused,
/// even after the owning instance is stopped and its slot removed. Cloning
/// produces another handle to the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    instances: Arc<RwLock<HashMap<InstanceId, Instance>>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly launched instance and return its new identifier
    ///
    /// Identifier generation and insertion happen under a single write-lock
    /// hold, so concurrent launches always yield distinct, both-valid
    /// records. Callers are responsible for having validated that the
    /// application is installed.
    pub fn start(
        &self,
        app_id: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<InstanceId> {
        let instance = Instance::new(app_id, app_name);
        let id = instance.id;

        let mut instances = self
            .instances
            .write()
            .map_err(|e| anyhow::anyhow!("Registry lock poisoned: {}", e))?;
        info!("Launched app: {} (Process ID: {})", instance.app_name, id);
        instances.insert(id, instance);
        Ok(id)
    }

    /// Remove a running instance, returning its record if it was present
    ///
    /// A missing id leaves the table untouched; under concurrent stops of the
    /// same id, exactly one caller receives the record.
    pub fn stop(&self, id: InstanceId) -> Result<Option<Instance>> {
        let mut instances = self
            .instances
            .write()
            .map_err(|e| anyhow::anyhow!("Registry lock poisoned: {}", e))?;
        let removed = instances.remove(&id);
        if let Some(ref instance) = removed {
            info!("Terminated app: {} (Process ID: {})", instance.app_name, id);
        }
        Ok(removed)
    }

    /// Snapshot of all running instances, in no particular order
    pub fn list_all(&self) -> Result<Vec<Instance>> {
        let instances = self
            .instances
            .read()
            .map_err(|e| anyhow::anyhow!("Registry lock poisoned: {}", e))?;
        Ok(instances.values().cloned().collect())
    }

    /// Number of currently running instances
    pub fn running_count(&self) -> usize {
        self.instances.read().map(|i| i.len()).unwrap_or(0)
    }

    /// Number of running instances of a given application
    pub fn count_for(&self, app_name: &str) -> usize {
        self.instances
            .read()
            .map(|i| i.values().filter(|inst| inst.app_name == app_name).count())
            .unwrap_or(0)
    }
}
