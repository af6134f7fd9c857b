//! CLI transcription command implementation.
//!
//! Resolves arguments against environment and config defaults, checks the
//! preconditions, and prints exactly one JSON document to stdout.
//!
//! Exit code 1 is reserved for precondition failures (no argument, missing
//! file, unusable config). Engine failures are reported inside the JSON
//! result and exit 0, so downstream consumers always get a parseable line.

use crate::cli::args::Cli;
use crate::config::{load_config, load_config_from, Config};
use crate::domain::types::{PreconditionFailure, TranscriptionRequest};
use crate::transcription::service;
use anyhow::Result;
use log::{error, warn};
use serde::Serialize;
use std::process::ExitCode;

/// Run the transcribe command.
pub fn run(cli: Cli) -> ExitCode {
    let Some(audio_path) = cli.audio else {
        return precondition_failure("No audio file provided");
    };

    if !audio_path.exists() {
        return precondition_failure(&format!("File not found: {}", audio_path.display()));
    }

    let mut config = match load_config_cascade(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return precondition_failure(&format!("{e:#}")),
    };
    if let Some(max_repeats) = cli.max_repeats {
        config.max_repeats = max_repeats;
    }

    let request = TranscriptionRequest {
        audio_path,
        model_size: cli
            .model_size
            .unwrap_or_else(|| config.default_model.clone()),
        language: cli.language.unwrap_or_else(|| config.language.clone()),
    };

    let outcome = service::transcribe(&request, &config);
    print_json(&outcome);
    ExitCode::SUCCESS
}

/// Load config with cascade: custom path -> default path -> defaults.
///
/// An explicitly given config path must be usable; the default path falls
/// back to built-in defaults when missing or broken.
fn load_config_cascade(custom_path: Option<&std::path::Path>) -> Result<Config> {
    match custom_path {
        Some(path) => load_config_from(path),
        None => Ok(load_config().unwrap_or_else(|e| {
            warn!("Ignoring config: {e:#}");
            Config::default()
        })),
    }
}

fn precondition_failure(message: &str) -> ExitCode {
    print_json(&PreconditionFailure {
        error: message.to_string(),
    });
    ExitCode::FAILURE
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        // Unreachable for these plain structs.
        Err(e) => error!("Failed to serialize result: {e}"),
    }
}
