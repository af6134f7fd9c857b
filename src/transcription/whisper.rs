use anyhow::{Context, Result};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::domain::traits::Transcription;

pub struct WhisperSTT {
    ctx: WhisperContext,
    model_path: String,
}

impl WhisperSTT {
    pub fn new(model_path: &str) -> Result<Self> {
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .context("Failed to load Whisper model")?;

        Ok(Self {
            ctx,
            model_path: model_path.to_string(),
        })
    }

    pub fn transcribe(&self, samples: &[f32], language: Option<&str>) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: 5,
            patience: -1.0,
        });

        if let Some(lang) = language {
            params.set_language(Some(lang));
        }

        // Deterministic decoding, with the temperature retry ladder disabled.
        params.set_temperature(0.0);
        params.set_temperature_inc(0.0);

        // Decode each segment independently of prior output, so a decoder
        // loop cannot compound across segments.
        params.set_no_context(true);

        // Thresholds for rejecting low-confidence or silent segments.
        params.set_entropy_thold(2.4);
        params.set_logprob_thold(-1.0);
        params.set_no_speech_thold(0.6);

        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(false);

        let mut state = self.ctx.create_state()?;
        state.full(params, samples)?;

        let num_segments = state.full_n_segments()?;
        let mut text = String::new();

        for i in 0..num_segments {
            if let Ok(segment) = state.full_get_segment_text(i) {
                text.push_str(&segment);
                text.push(' ');
            }
        }

        Ok(text.trim().to_string())
    }
}

impl Transcription for WhisperSTT {
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String> {
        let language = match language {
            "" | "auto" => None,
            other => Some(other),
        };
        WhisperSTT::transcribe(self, samples, language)
    }

    fn model_name(&self) -> Option<String> {
        Some(self.model_path.clone())
    }
}
