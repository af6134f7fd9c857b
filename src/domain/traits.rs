//! Core domain traits for dependency inversion.
//!
//! The transcription engine sits behind a narrow trait so the CLI layer and
//! the repetition collapser can be tested with a mock engine, without any
//! model weights on disk.

use anyhow::Result;

/// Speech-to-text transcription abstraction.
///
/// Implementors convert audio samples to text.
pub trait Transcription: Send + Sync {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `samples` - Audio samples at 16kHz mono
    /// * `language` - Language code (e.g., "en"); empty or "auto" lets the
    ///   engine detect the language
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String>;

    /// Name or path of the loaded model.
    fn model_name(&self) -> Option<String>;
}
