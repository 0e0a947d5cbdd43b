//! appman - Track installed applications and their running instances
//!
//! The binary runs a short console demonstration: it seeds the catalog with a
//! few sample applications, launches and terminates instances, and prints the
//! status text each lifecycle call returns.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use appman::{CatalogStore, InstanceRegistry, LaunchOutcome, LifecycleService};

/// Application name constant
pub const APP_NAME: &str = "appman";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sample applications pre-registered at startup
const SEED_APPS: &[(&str, &str)] = &[
    ("browser_app", "NeuralBrowser"),
    ("email_app", "NeuralMail"),
    ("photos_app", "NeuralPhotos"),
];

fn main() -> Result<()> {
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let service = LifecycleService::new(CatalogStore::new(), InstanceRegistry::new());

    for (app_id, display_name) in SEED_APPS {
        service.install_application(*app_id, *display_name)?;
    }

    print_installed(&service)?;

    let browser = service.launch_application("browser_app")?;
    service.launch_application("email_app")?;

    print_running(&service)?;

    println!("{}", service.install_application("new_game_app", "NeuralGame")?);
    println!("{}", service.install_application("browser_app", "NeuralBrowser")?);

    if let LaunchOutcome::Launched(id) = browser {
        println!("{}", service.terminate_application(id)?);
        // Second terminate of the same id reports not-found
        println!("{}", service.terminate_application(id)?);
    }

    match service.launch_application("nonexistent_app")? {
        LaunchOutcome::Launched(id) => println!("Launched unexpected instance {}", id),
        LaunchOutcome::NotInstalled => println!("Application nonexistent_app is not installed."),
    }

    print_running(&service)?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

fn print_installed(service: &LifecycleService) -> Result<()> {
    println!("\nInstalled Applications:");
    for app in service.list_installed()? {
        println!(" - {}", app);
    }
    Ok(())
}

fn print_running(service: &LifecycleService) -> Result<()> {
    println!("\nRunning Instances:");
    for instance in service.list_running()? {
        println!(" - {}", instance);
    }
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("appman=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
