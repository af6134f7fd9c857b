pub mod cli;
pub mod config;
pub mod dedupe;
pub mod domain;
pub mod models;
pub mod transcription;

#[cfg(test)]
pub mod test_support;
