//! CLI surface: argument parsing, the transcription run, WAV loading.

pub mod args;
pub mod transcribe;
pub mod wav_reader;

pub use args::Cli;
