//! Shared types used across multiple modules.

use serde::Serialize;
use std::path::PathBuf;

/// Inputs for a single transcription run, resolved once from CLI arguments,
/// environment variables, and config defaults.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio_path: PathBuf,
    /// Model size identifier ("base.en", "small", ...) or a path to a ggml
    /// file. Passed through without validating against a list of known sizes.
    pub model_size: String,
    pub language: String,
}

/// Outcome status of a transcription run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The JSON document printed to stdout for a completed run.
///
/// Engine failures are folded into this shape (`status: "error"`, empty
/// `text`) so stdout always carries parseable JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionOutcome {
    pub text: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranscriptionOutcome {
    pub fn success(text: String) -> Self {
        Self {
            text,
            status: Status::Success,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            text: String::new(),
            status: Status::Error,
            error: Some(message),
        }
    }
}

/// Minimal JSON shape for argument and file-existence failures.
///
/// Unlike engine failures these carry only an `error` key and exit nonzero.
#[derive(Debug, Clone, Serialize)]
pub struct PreconditionFailure {
    pub error: String,
}
