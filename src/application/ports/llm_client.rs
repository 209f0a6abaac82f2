use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `prompt` as a single-turn completion and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api request failed: {0}")]
    Transport(String),
    #[error("completion service returned status {status}")]
    UpstreamRejection { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
