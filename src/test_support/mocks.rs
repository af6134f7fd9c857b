//! Mock implementations for unit testing.
//!
//! Implements the `Transcription` trait so the invoker and CLI paths can be
//! exercised without real model weights.

use crate::domain::traits::Transcription;
use anyhow::{bail, Result};

/// Mock transcription engine returning canned text or a canned failure.
pub struct MockTranscriber {
    outcome: Result<String, String>,
}

impl MockTranscriber {
    /// A mock that succeeds with the given raw transcript.
    pub fn returning(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    /// A mock that fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

impl Transcription for MockTranscriber {
    fn transcribe(&self, _samples: &[f32], _language: &str) -> Result<String> {
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{message}"),
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("mock".to_string())
    }
}
