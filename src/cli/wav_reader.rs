//! WAV file reading and audio preparation utilities.

use anyhow::{Context, Result};
use rubato::{FftFixedIn, Resampler};
use std::path::Path;

/// Audio data read from a WAV file.
pub struct WavAudio {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1=mono, 2=stereo)
    pub channels: u16,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Samples per channel (interleaved for stereo)
    pub samples: Vec<f32>,
}

/// Read a WAV file and convert to f32 samples.
///
/// Supports 8/16/24/32-bit integer and 32-bit float formats.
pub fn read_wav(path: &Path) -> Result<WavAudio> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels;
    let bits_per_sample = spec.bits_per_sample;
    let sample_format = spec.sample_format;

    let samples: Vec<f32> = match sample_format {
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read WAV samples")?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read WAV samples")?,
    };

    let total_samples = samples.len() / channels as usize;
    let duration_secs = total_samples as f64 / sample_rate as f64;

    Ok(WavAudio {
        sample_rate,
        channels,
        duration_secs,
        samples,
    })
}

/// Convert multi-channel audio to mono by averaging channels.
fn to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels == 1 {
        return samples.to_vec();
    }

    let num_channels = channels as usize;
    let num_frames = samples.len() / num_channels;
    let mut mono = Vec::with_capacity(num_frames);

    for i in 0..num_frames {
        let mut sum = 0.0;
        for ch in 0..num_channels {
            sum += samples[i * num_channels + ch];
        }
        mono.push(sum / num_channels as f32);
    }

    mono
}

/// Resample audio to 16kHz using rubato.
fn resample_to_16khz(samples: &[f32], input_rate: u32) -> Result<Vec<f32>> {
    const TARGET_RATE: u32 = 16000;

    if input_rate == TARGET_RATE {
        return Ok(samples.to_vec());
    }

    let mut resampler = FftFixedIn::<f32>::new(
        input_rate as usize,
        TARGET_RATE as usize,
        1024, // chunk size
        2,    // sub chunks
        1,    // channels
    )
    .context("Failed to create resampler")?;

    let mut output = Vec::new();
    let mut input_pos = 0;

    // Process full chunks
    let frames_needed = resampler.input_frames_next();
    while input_pos + frames_needed <= samples.len() {
        let input_chunk: Vec<Vec<f32>> =
            vec![samples[input_pos..input_pos + frames_needed].to_vec()];
        let resampled = resampler
            .process(&input_chunk, None)
            .context("Resampling failed")?;
        output.extend_from_slice(&resampled[0]);
        input_pos += frames_needed;
    }

    // Process remaining samples with padding
    if input_pos < samples.len() {
        let remaining = &samples[input_pos..];
        let mut padded = remaining.to_vec();
        padded.resize(frames_needed, 0.0);
        let input_chunk: Vec<Vec<f32>> = vec![padded];
        let resampled = resampler
            .process(&input_chunk, None)
            .context("Resampling final chunk failed")?;

        // Only keep as many output samples as the unpadded tail produces.
        let remaining_duration = remaining.len() as f64 / input_rate as f64;
        let expected_output = (remaining_duration * TARGET_RATE as f64).ceil() as usize;
        let actual_output = expected_output.min(resampled[0].len());
        output.extend_from_slice(&resampled[0][..actual_output]);
    }

    Ok(output)
}

/// Prepare audio for Whisper transcription: mix to mono, resample to 16kHz.
pub fn prepare_for_whisper(audio: &WavAudio) -> Result<Vec<f32>> {
    let mono = to_mono(&audio.samples, audio.channels);
    resample_to_16khz(&mono, audio.sample_rate)
}
