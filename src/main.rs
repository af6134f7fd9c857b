use clap::Parser;
use std::process::ExitCode;

use whisper_transcribe::cli::{transcribe, Cli};

fn main() -> ExitCode {
    // stdout is reserved for the single JSON result; diagnostics go to
    // stderr through the log facade and are opt-in via RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // Route whisper.cpp's C-side logging through the log facade instead of
    // letting it write to stderr directly.
    whisper_rs::install_whisper_log_trampoline();

    transcribe::run(Cli::parse())
}
