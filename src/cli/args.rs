//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Offline Whisper transcription emitting one JSON result per run.
#[derive(Parser, Debug)]
#[command(name = "whisper-transcribe")]
#[command(about = "Transcribe an audio file with a local Whisper model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the audio file (WAV)
    pub audio: Option<PathBuf>,

    /// Model size identifier (tiny, base.en, small, ...) or path to a ggml file
    #[arg(env = "WHISPER_MODEL")]
    pub model_size: Option<String>,

    /// Language code (e.g. en); empty or "auto" lets the engine detect it
    #[arg(env = "WHISPER_LANGUAGE")]
    pub language: Option<String>,

    /// Config file path (default: ~/.config/whisper-transcribe/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum consecutive copies of a sentence kept in the output
    #[arg(long)]
    pub max_repeats: Option<usize>,
}
