use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Maximum consecutive copies of a sentence kept by the repetition
    /// collapser.
    #[serde(default = "default_max_repeats")]
    pub max_repeats: usize,
    /// Override for the directory holding ggml model files.
    #[serde(default)]
    pub models_dir: Option<PathBuf>,
}

fn default_model() -> String {
    "base.en".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_repeats() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            language: default_language(),
            max_repeats: default_max_repeats(),
            models_dir: None,
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("whisper-transcribe")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &std::path::Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&content).with_context(|| "Failed to parse config")
}
