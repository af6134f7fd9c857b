pub mod service;
pub mod whisper;

pub(crate) use whisper::WhisperSTT;
