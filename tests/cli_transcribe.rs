//! Integration test: CLI interface.
//!
//! Runs the compiled binary as a subprocess and validates the JSON contract:
//! exactly one JSON document on stdout, precondition failures with exit code
//! 1, engine failures reported inside the result with exit code 0. None of
//! these paths require Whisper model weights.

use serde_json::Value;
use std::process::Command;

/// Helper: find the debug binary path.
fn binary_path() -> std::path::PathBuf {
    // cargo test compiles to target/debug/
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .parent()
        .expect("grandparent")
        .to_path_buf();
    path.push("whisper-transcribe");
    path
}

/// A Command for the binary, with the env fallbacks cleared so test results
/// do not depend on the ambient environment.
fn transcribe_cmd() -> Command {
    let mut cmd = Command::new(binary_path());
    cmd.env_remove("WHISPER_MODEL").env_remove("WHISPER_LANGUAGE");
    cmd
}

/// Parse stdout as exactly one line of JSON.
fn single_json_line(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim_end_matches('\n');
    assert!(
        !trimmed.contains('\n'),
        "stdout should be a single line: {text:?}"
    );
    serde_json::from_str(trimmed).expect("stdout should be valid JSON")
}

/// Write a tiny valid mono 16kHz WAV file and return its path.
fn write_test_wav(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("wt_cli_tests");
    let _ = std::fs::create_dir_all(&dir);
    let path = dir.join(name);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).expect("create wav");
    for _ in 0..1600 {
        writer.write_sample(0i16).expect("write sample");
    }
    writer.finalize().expect("finalize wav");
    path
}

/// No arguments: minimal JSON error with exit code 1 and no `status` key.
#[test]
fn missing_audio_argument() {
    let output = transcribe_cmd().output().expect("failed to execute");

    assert_eq!(output.status.code(), Some(1));
    let json = single_json_line(&output.stdout);
    assert_eq!(json["error"], "No audio file provided");
    assert!(json.get("status").is_none(), "no status key: {json}");
    assert!(json.get("text").is_none(), "no text key: {json}");
}

/// Nonexistent audio path: the literal path is echoed, exit code 1.
#[test]
fn nonexistent_audio_path() {
    let path = "/tmp/definitely_nonexistent_wt_test.wav";
    let output = transcribe_cmd().arg(path).output().expect("failed to execute");

    assert_eq!(output.status.code(), Some(1));
    let json = single_json_line(&output.stdout);
    assert_eq!(json["error"], format!("File not found: {path}"));
    assert!(json.get("status").is_none());
}

/// A missing model is an engine failure: full result shape, exit code 0.
#[test]
fn missing_model_is_reported_in_result() {
    let wav = write_test_wav("missing_model.wav");
    let output = transcribe_cmd()
        .arg(&wav)
        .arg("no-such-model-size")
        .output()
        .expect("failed to execute");

    assert_eq!(output.status.code(), Some(0), "engine failures exit 0");
    let json = single_json_line(&output.stdout);
    assert_eq!(json["status"], "error");
    assert_eq!(json["text"], "");
    let message = json["error"].as_str().expect("error message string");
    assert!(message.contains("Model not found"), "got: {message}");
}

/// WHISPER_MODEL env var supplies the model size when the positional is
/// omitted.
#[test]
fn model_env_var_is_used_as_fallback() {
    let wav = write_test_wav("env_fallback.wav");
    let output = transcribe_cmd()
        .env("WHISPER_MODEL", "env-model-size")
        .arg(&wav)
        .output()
        .expect("failed to execute");

    assert_eq!(output.status.code(), Some(0));
    let json = single_json_line(&output.stdout);
    assert_eq!(json["status"], "error");
    let message = json["error"].as_str().expect("error message string");
    assert!(
        message.contains("env-model-size"),
        "resolution should have tried the env model: {message}"
    );
}

/// An unreadable custom config file is a precondition failure.
#[test]
fn broken_custom_config_fails_preconditions() {
    let wav = write_test_wav("broken_config.wav");
    let dir = std::env::temp_dir().join("wt_cli_tests");
    let config = dir.join("broken.toml");
    std::fs::write(&config, "not [valid toml").expect("write config");

    let output = transcribe_cmd()
        .arg(&wav)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to execute");

    assert_eq!(output.status.code(), Some(1));
    let json = single_json_line(&output.stdout);
    assert!(json.get("error").is_some());
    assert!(json.get("status").is_none());
}

/// --help prints usage information and exits successfully.
#[test]
fn cli_help_flag() {
    let output = transcribe_cmd().arg("--help").output().expect("failed to execute");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("whisper-transcribe") || stdout.contains("Whisper"),
        "help should mention the tool or purpose"
    );
}

/// --version prints version and exits successfully.
#[test]
fn cli_version_flag() {
    let output = transcribe_cmd()
        .arg("--version")
        .output()
        .expect("failed to execute");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("whisper-transcribe"),
        "version should contain binary name"
    );
}
