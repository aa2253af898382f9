use dotenvy::dotenv;

mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::{app::App, dependency_injection::DependencyContainer};

/// Storefront Entry Point
///
/// Initializes logging and configuration, wires dependencies, and runs the
/// interactive store on the terminal.
///
/// - config/: Catalog endpoint configuration
/// - setup/: Dependency injection and the event loop
/// - ui/: Commands, state transitions and rendering
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, on stderr so it stays out of the screen
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the store
    App::run(container).await?;

    Ok(())
}
