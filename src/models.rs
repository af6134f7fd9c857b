//! Whisper model file resolution.
//!
//! Model size identifiers map to ggml files from the whisper.cpp model
//! collection ("base.en" -> ggml-base.en.bin). The identifier is passed
//! through without validation; an unknown name simply fails to resolve.

use crate::config::Config;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub fn models_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.models_dir {
        return dir.clone();
    }

    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("whisper-transcribe")
}

/// ggml filename for a size identifier. Values that already look like a
/// model file are kept as-is.
pub fn model_filename(size: &str) -> String {
    if size.ends_with(".bin") {
        size.to_string()
    } else {
        format!("ggml-{}.bin", size)
    }
}

/// Resolve a model size identifier (or direct path) to an existing ggml file.
pub fn resolve_model(size: &str, config: &Config) -> Result<PathBuf> {
    // An existing path, absolute or relative, wins over size lookup.
    let as_path = Path::new(size);
    if as_path.is_file() {
        return Ok(as_path.to_path_buf());
    }

    let in_models_dir = models_dir(config).join(model_filename(size));
    if in_models_dir.is_file() {
        return Ok(in_models_dir);
    }

    bail!(
        "Model not found: {}. Tried: {}, {}",
        size,
        as_path.display(),
        in_models_dir.display()
    );
}
