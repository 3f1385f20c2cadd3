//! Easel CLI
//!
//! Command-line interface for reference-guided image generation against a
//! Replicate-style API: upload a reference image, run a model on it, and
//! wait for the output URLs.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Reference-guided image generation CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "REPLICATE_API_BASE",
        default_value = "https://api.replicate.com/v1"
    )]
    api_base: String,

    /// API token; startup fails without one
    #[arg(long, env = "REPLICATE_API_TOKEN", hide_env_values = true)]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; client-side poll traces show up under RUST_LOG=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_base: cli.api_base,
        token: cli.token,
    };

    handle_command(cli.command, &config).await
}
