//! User Admin Console - Application entry point
//!
//! CLI-based entry point that dispatches to the console commands.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use console_lib::{
    cli::{Cli, Commands},
    commands, AppState, ConsoleConfig, HttpUserApi,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let mut config = ConsoleConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config = config.with_base_url(url);
    }
    tracing::debug!("Configuration loaded, API at {}", config.api.base_url);

    let api = match HttpUserApi::new(config.api.clone()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(Arc::new(api), &config);

    // Execute command
    let result = match cli.command {
        Commands::Login(args) => commands::login::execute(args, &state).await,
        Commands::Register(args) => commands::register::execute(args, &state).await,
        Commands::Profile(args) => commands::profile::execute(args, &state).await,
        Commands::Users(args) => commands::users::execute(args, &state).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
