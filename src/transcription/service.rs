//! Transcription invoker.
//!
//! Runs the pipeline for one request: resolve the model, load it, decode the
//! audio, and collapse sentence repetition in the output. Everything between
//! model resolution and decoding is caught at this boundary and folded into a
//! uniform [`TranscriptionOutcome`], so stdout always carries well-formed
//! JSON whatever the engine does. No retries; a failed attempt is final.

use crate::cli::wav_reader::{prepare_for_whisper, read_wav};
use crate::config::Config;
use crate::dedupe::collapse_repetitions;
use crate::domain::traits::Transcription;
use crate::domain::types::{TranscriptionOutcome, TranscriptionRequest};
use crate::models::resolve_model;
use crate::transcription::WhisperSTT;
use anyhow::Result;
use log::debug;

/// Run the full pipeline for one request.
pub fn transcribe(request: &TranscriptionRequest, config: &Config) -> TranscriptionOutcome {
    match try_transcribe(request, config) {
        Ok(text) => TranscriptionOutcome::success(text),
        Err(e) => TranscriptionOutcome::error(format!("{e:#}")),
    }
}

fn try_transcribe(request: &TranscriptionRequest, config: &Config) -> Result<String> {
    let model_path = resolve_model(&request.model_size, config)?;
    debug!("Loading model: {}", model_path.display());

    let engine = WhisperSTT::new(&model_path.to_string_lossy())?;
    transcribe_with_engine(&engine, request, config)
}

/// Decode and post-process with an already-loaded engine.
///
/// Split out from [`try_transcribe`] so tests can substitute a mock
/// [`Transcription`] implementation for the real model.
pub fn transcribe_with_engine(
    engine: &dyn Transcription,
    request: &TranscriptionRequest,
    config: &Config,
) -> Result<String> {
    let audio = read_wav(&request.audio_path)?;
    debug!(
        "Read {}: {} channels, {}Hz, {:.1}s",
        request.audio_path.display(),
        audio.channels,
        audio.sample_rate,
        audio.duration_secs
    );

    let samples = prepare_for_whisper(&audio)?;

    debug!(
        "Transcribing with {} (language: {})",
        engine.model_name().unwrap_or_else(|| "<unnamed>".to_string()),
        request.language
    );
    let raw = engine.transcribe(&samples, &request.language)?;

    Ok(collapse_repetitions(raw.trim(), config.max_repeats))
}
