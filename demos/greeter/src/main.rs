//! Greeter Sample Application Entry Point

use std::process::ExitCode;

use greeter::config::GreeterConfig;
use greeter::program::greet_console;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the conversation
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,greeter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match GreeterConfig::from_env() {
        Ok(config) => {
            tracing::debug!(?config, "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            GreeterConfig::default()
        }
    };

    let program = greet_console(&config);

    match program.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Greeter failed");
            ExitCode::FAILURE
        }
    }
}
