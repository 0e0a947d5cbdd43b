//! Core module - Installed catalog, running-instance registry, and the
//! lifecycle service that coordinates them

mod app;
mod catalog;
mod instance;
mod registry;
mod service;

pub use app::Application;
pub use catalog::{CatalogStore, InstallOutcome};
pub use instance::{Instance, InstanceId};
pub use registry::InstanceRegistry;
pub use service::{LaunchOutcome, LifecycleService};
