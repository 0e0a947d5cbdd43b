//! Lifecycle service - Orchestrates the catalog and the instance registry

use anyhow::Result;

use super::app::Application;
use super::catalog::{CatalogStore, InstallOutcome};
use super::instance::{Instance, InstanceId};
use super::registry::InstanceRegistry;

/// Outcome of a launch attempt
///
/// A launch against an app id that was never installed is a negative result,
/// not a fault; no identifier is issued and no record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched(InstanceId),
    NotInstalled,
}

impl LaunchOutcome {
    /// The issued identifier, if the launch succeeded
    pub fn instance_id(&self) -> Option<InstanceId> {
        match self {
            Self::Launched(id) => Some(*id),
            Self::NotInstalled => None,
        }
    }
}

/// Façade over the installed catalog and the running-instance table
///
/// Holds shared handles to both stores; cloning the service shares the same
/// underlying state. Fresh stores can be injected per test for isolation.
#[derive(Debug, Clone, Default)]
pub struct LifecycleService {
    catalog: CatalogStore,
    instances: InstanceRegistry,
}

impl LifecycleService {
    pub fn new(catalog: CatalogStore, instances: InstanceRegistry) -> Self {
        Self { catalog, instances }
    }

    /// Install an application, reporting the outcome as a status string
    pub fn install_application(
        &self,
        app_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<String> {
        let display_name = display_name.into();
        let status = match self.catalog.install(app_id, display_name.clone())? {
            InstallOutcome::Installed => {
                format!("Application {} installed successfully.", display_name)
            }
            InstallOutcome::AlreadyInstalled => {
                format!("Application {} is already installed.", display_name)
            }
        };
        Ok(status)
    }

    /// Launch an installed application, issuing a fresh instance identifier
    pub fn launch_application(&self, app_id: &str) -> Result<LaunchOutcome> {
        let Some(app) = self.catalog.lookup(app_id) else {
            return Ok(LaunchOutcome::NotInstalled);
        };

        let id = self.instances.start(app.app_id, app.display_name)?;
        Ok(LaunchOutcome::Launched(id))
    }

    /// Terminate a running instance, reporting the outcome as a status string
    pub fn terminate_application(&self, id: InstanceId) -> Result<String> {
        let status = match self.instances.stop(id)? {
            Some(instance) => format!("Application {} terminated.", instance.app_name),
            None => format!("Process {} not found or not running.", id),
        };
        Ok(status)
    }

    /// Snapshot of the installed catalog
    pub fn list_installed(&self) -> Result<Vec<Application>> {
        self.catalog.list_all()
    }

    /// Snapshot of the running-instance table
    pub fn list_running(&self) -> Result<Vec<Instance>> {
        self.instances.list_all()
    }

    /// Number of currently running instances
    pub fn running_count(&self) -> usize {
        self.instances.running_count()
    }

    /// Number of running instances of a given application
    pub fn running_count_for(&self, app_name: &str) -> usize {
        self.instances.count_for(app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LifecycleService {
        LifecycleService::new(CatalogStore::new(), InstanceRegistry::new())
    }

    #[test]
    fn install_reports_success_then_already_installed() {
        let svc = service();
        let first = svc.install_application("browser_app", "NeuralBrowser").unwrap();
        let second = svc.install_application("browser_app", "NeuralBrowser").unwrap();

        assert_eq!(first, "Application NeuralBrowser installed successfully.");
        assert_eq!(second, "Application NeuralBrowser is already installed.");
        assert_ne!(first, second);
    }

    #[test]
    fn launch_requires_install() {
        let svc = service();
        let outcome = svc.launch_application("nonexistent_app").unwrap();
        assert_eq!(outcome, LaunchOutcome::NotInstalled);
        assert_eq!(svc.running_count(), 0);
    }

    #[test]
    fn launch_issues_identifier_for_installed_app() {
        let svc = service();
        svc.install_application("photos_app", "NeuralPhotos").unwrap();

        let outcome = svc.launch_application("photos_app").unwrap();
        let id = outcome.instance_id().expect("launch should succeed");

        let running = svc.list_running().unwrap();
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].id, id);
        assert_eq!(running[0].app_name, "NeuralPhotos");
    }

    #[test]
    fn terminate_names_the_application() {
        let svc = service();
        svc.install_application("browser_app", "NeuralBrowser").unwrap();
        let id = svc
            .launch_application("browser_app")
            .unwrap()
            .instance_id()
            .unwrap();

        let status = svc.terminate_application(id).unwrap();
        assert_eq!(status, "Application NeuralBrowser terminated.");

        let again = svc.terminate_application(id).unwrap();
        assert_eq!(again, format!("Process {} not found or not running.", id));
    }
}
