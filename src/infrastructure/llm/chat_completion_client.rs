use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionError, LlmClient};
use crate::presentation::config::CompletionSettings;

pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

/// Wraps the recognized symptoms in the fixed advice prompt.
pub fn build_symptom_prompt(symptoms: &str) -> String {
    format!("My symptoms are: {}. Suggest me medicines.", symptoms)
}

/// Non-streaming client for OpenAI-compatible `/chat/completions` endpoints
/// (Mistral by default). One attempt per call, no retries.
pub struct ChatCompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ChatCompletionClient {
    pub fn new(settings: &CompletionSettings) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| CompletionError::Transport(format!("client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_tokens: settings.max_tokens,
        })
    }

    fn build_request(&self, symptoms: &str) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            stream: false,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(build_symptom_prompt(symptoms)),
            }],
        }
    }
}

fn first_choice_text(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(format!("parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("response has no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| CompletionError::MalformedResponse("first choice has no content".to_string()))
}

#[async_trait]
impl LlmClient for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request_body = self.build_request(prompt);

        tracing::debug!(model = %self.model, max_tokens = self.max_tokens, "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Transport(format!("timed out: {}", e))
                } else {
                    CompletionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(format!("body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Completion service rejected request");
            return Err(CompletionError::UpstreamRejection {
                status: status.as_u16(),
                body,
            });
        }

        let reply = first_choice_text(&body)?;

        tracing::info!(chars = reply.len(), "Completion received");

        Ok(reply)
    }
}
