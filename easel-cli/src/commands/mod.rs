//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod generate;
mod prediction;

pub use generate::GenerateArgs;
pub use prediction::PredictionCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an image from a reference photo
    Generate(GenerateArgs),
    /// Inspect or wait on existing predictions
    Prediction {
        #[command(subcommand)]
        command: PredictionCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate(args) => generate::handle_generate_command(args, config).await,
        Commands::Prediction { command } => {
            prediction::handle_prediction_command(command, config).await
        }
    }
}
