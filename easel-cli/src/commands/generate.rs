//! Generate command handler
//!
//! Runs the full flow: upload the reference image, create a prediction,
//! wait for a terminal status, and print the output URLs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use easel_client::{PollOptions, ReplicateClient};
use easel_core::domain::prediction::PredictionStatus;
use easel_core::dto::prediction::PredictionInput;

use crate::commands::prediction::colorize_status;
use crate::config::Config;

const DEFAULT_MODEL: &str = "black-forest-labs/flux-kontext-max";
const DEFAULT_PROMPT: &str = "Use the reference person identity and generate a realistic, \
     natural full-body portrait, standing pose, clean background, high detail, \
     35mm photography style.";
const DEFAULT_ASPECT_RATIO: &str = "2:3";

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the reference image
    #[arg(long)]
    reference: PathBuf,

    /// Model identifier to run
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Generation prompt
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Aspect ratio of the generated image
    #[arg(long, default_value = DEFAULT_ASPECT_RATIO)]
    aspect_ratio: String,

    /// Maximum time to wait for the prediction, in seconds
    #[arg(long, default_value_t = 600)]
    max_wait: u64,

    /// Delay between status checks, in seconds
    #[arg(long, default_value_t = 2)]
    poll_interval: u64,
}

/// Handle the generate command
///
/// Exits with status 1 when the prediction's terminal status is not
/// `succeeded`; transport, HTTP, and timeout errors propagate as errors.
pub async fn handle_generate_command(args: GenerateArgs, config: &Config) -> Result<()> {
    let reference = args
        .reference
        .canonicalize()
        .with_context(|| format!("Reference image not found: {}", args.reference.display()))?;

    let client = ReplicateClient::new(&config.api_base, &config.token);

    println!(
        "{} {}",
        "Uploading reference:".bold(),
        reference.display().to_string().dimmed()
    );
    let uploaded = client
        .upload_file(&reference)
        .await
        .context("Failed to upload reference image")?;
    println!("{} {}", "Uploaded URL:".bold(), uploaded.urls.get.dimmed());

    println!(
        "{} {}",
        "Creating prediction with model:".bold(),
        args.model.cyan()
    );
    let input = PredictionInput {
        prompt: args.prompt,
        input_image: Some(uploaded.urls.get.clone()),
        aspect_ratio: Some(args.aspect_ratio),
    };
    let prediction = client
        .create_prediction(&args.model, input)
        .await
        .context("Failed to create prediction")?;
    println!("{} {}", "Prediction ID:".bold(), prediction.id.cyan());

    let options = PollOptions {
        interval: Duration::from_secs(args.poll_interval),
        max_wait: Duration::from_secs(args.max_wait),
    };
    let result = client
        .wait_for(&prediction, options)
        .await
        .context("Failed while waiting for prediction")?;

    println!(
        "{} {}",
        "Final status:".bold(),
        colorize_status(&result.status)
    );

    if result.status != PredictionStatus::Succeeded {
        if let Some(error) = &result.error {
            println!("{}", error.red());
        }
        if let Ok(pretty) = serde_json::to_string_pretty(&result) {
            println!("{}", pretty);
        }
        std::process::exit(1);
    }

    let outputs = result.output_urls();
    if outputs.is_empty() {
        println!("{}", "No output URLs in the final payload.".yellow());
    } else {
        for (idx, url) in outputs.iter().enumerate() {
            println!("Output[{}]: {}", idx + 1, url);
        }
    }

    Ok(())
}
