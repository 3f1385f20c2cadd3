//! Prediction command handlers
//!
//! Handles inspection of existing predictions: fetching current details
//! and waiting for a terminal status.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use easel_client::{PollOptions, ReplicateClient};
use easel_core::domain::prediction::{Prediction, PredictionStatus};

use crate::config::Config;

/// Prediction subcommands
#[derive(Subcommand)]
pub enum PredictionCommands {
    /// Get prediction details
    Get {
        /// Prediction ID
        id: String,
    },
    /// Wait for a prediction to reach a terminal status
    Wait {
        /// Prediction ID
        id: String,

        /// Maximum time to wait, in seconds
        #[arg(long, default_value_t = 600)]
        max_wait: u64,

        /// Delay between status checks, in seconds
        #[arg(long, default_value_t = 2)]
        poll_interval: u64,
    },
}

/// Handle prediction commands
///
/// Routes prediction subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The prediction command to execute
/// * `config` - The CLI configuration
pub async fn handle_prediction_command(command: PredictionCommands, config: &Config) -> Result<()> {
    let client = ReplicateClient::new(&config.api_base, &config.token);

    match command {
        PredictionCommands::Get { id } => get_prediction(&client, &id).await,
        PredictionCommands::Wait {
            id,
            max_wait,
            poll_interval,
        } => wait_prediction(&client, &id, max_wait, poll_interval).await,
    }
}

/// Get and display a single prediction
async fn get_prediction(client: &ReplicateClient, id: &str) -> Result<()> {
    let prediction = client
        .get_prediction(id)
        .await
        .context("Failed to fetch prediction")?;

    print_prediction_details(&prediction);

    Ok(())
}

/// Wait for a prediction to finish and display it
///
/// Exits with status 1 when the terminal status is not `succeeded`.
async fn wait_prediction(
    client: &ReplicateClient,
    id: &str,
    max_wait: u64,
    poll_interval: u64,
) -> Result<()> {
    let prediction = client
        .get_prediction(id)
        .await
        .context("Failed to fetch prediction")?;

    let result = if prediction.status.is_terminal() {
        prediction
    } else {
        let options = PollOptions {
            interval: Duration::from_secs(poll_interval),
            max_wait: Duration::from_secs(max_wait),
        };
        client
            .wait_for(&prediction, options)
            .await
            .context("Failed while waiting for prediction")?
    };

    print_prediction_details(&result);

    if result.status != PredictionStatus::Succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Print detailed prediction information
pub(crate) fn print_prediction_details(prediction: &Prediction) {
    let status_colored = colorize_status(&prediction.status);

    println!("{}", "Prediction Details:".bold());
    println!("  ID:          {}", prediction.id.cyan());
    if let Some(model) = &prediction.model {
        println!("  Model:       {}", model.dimmed());
    }
    println!("  Status:      {}", status_colored);

    if let Some(created) = prediction.created_at {
        println!("  Created:     {}", created.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(started) = prediction.started_at {
        println!("  Started:     {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(completed) = prediction.completed_at {
        println!("  Completed:   {}", completed.format("%Y-%m-%d %H:%M:%S"));

        // Calculate duration
        if let Some(started) = prediction.started_at {
            let duration = completed.signed_duration_since(started);
            let seconds = duration.num_seconds();
            println!("  Duration:    {}s", seconds);
        }
    }

    let outputs = prediction.output_urls();
    if !outputs.is_empty() {
        println!("\n{}", "Output:".bold());
        for url in &outputs {
            println!("  {}", url);
        }
    }

    if let Some(error) = &prediction.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }

    if let Some(logs) = &prediction.logs
        && !logs.is_empty()
    {
        println!("\n{}", "Logs:".bold());
        println!("{}", "─".repeat(80).dimmed());
        println!("{}", logs.trim_end());
        println!("{}", "─".repeat(80).dimmed());
    }
}

/// Colorize prediction status for display
pub(crate) fn colorize_status(status: &PredictionStatus) -> colored::ColoredString {
    let status_str = status.to_string();
    match status {
        PredictionStatus::Starting => status_str.yellow(),
        PredictionStatus::Processing => status_str.cyan(),
        PredictionStatus::Succeeded => status_str.green(),
        PredictionStatus::Failed => status_str.red(),
        PredictionStatus::Canceled => status_str.dimmed(),
        PredictionStatus::Unknown => status_str.normal(),
    }
}
