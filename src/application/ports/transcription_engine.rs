use async_trait::async_trait;

use crate::domain::{AudioBuffer, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// One-shot batch recognition of a single utterance.
    ///
    /// An utterance with no recognized speech yields an empty transcript,
    /// not an error.
    async fn transcribe(&self, audio: &AudioBuffer) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("backend returned status {status}: {body}")]
    BackendRejected { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("result segment {0} has no alternatives")]
    NoAlternatives(usize),
}
