use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;
mod ui;

use cli::{Cli, Commands};
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, kiosk::Kiosk};

/// Kiosk Entry Point
///
/// Parses the command line, wires dependencies and runs one command.
///
/// - config/: Environment configuration (storefront, scanner) with flag overrides
/// - setup/: Dependency injection and the command runner
/// - ui/: Terminal rendering and user-facing error messages
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter; stdout belongs to the prompts
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_overrides(&cli.overrides)?;
    tracing::info!(
        storefront = %config.storefront.base_url,
        scanner = %config.camera.source,
        "Configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    let kiosk = Kiosk::new(container, &config.storefront);
    kiosk.run(cli.command.unwrap_or(Commands::Scan)).await
}
