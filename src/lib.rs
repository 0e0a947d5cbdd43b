//! appman - Track installed applications and their running instances
//!
//! The core is a pair of concurrent-safe stores: a catalog of installed
//! applications and a registry of running instances, coordinated by
//! [`LifecycleService`] into install / launch / terminate transitions.
//! All outcomes, including "already installed" and "not found", are ordinary
//! result values rather than errors.

pub mod core;

pub use crate::core::{
    Application, CatalogStore, InstallOutcome, Instance, InstanceId, InstanceRegistry,
    LaunchOutcome, LifecycleService,
};
