use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioBuffer, Transcript};

pub const DEFAULT_SPEECH_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

/// Synchronous `speech:recognize` client for Google Cloud Speech-to-Text.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language_code: String,
}

impl GoogleSpeechEngine {
    pub fn new(
        endpoint: &str,
        api_key: &str,
        language_code: &str,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            language_code: language_code.to_string(),
        })
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'a str,
    sample_rate_hertz: u32,
    audio_channel_count: u16,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

fn join_top_alternatives(results: Vec<RecognitionResult>) -> Result<Transcript, TranscriptionError> {
    let segments = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            result
                .alternatives
                .into_iter()
                .next()
                .map(|alternative| alternative.transcript)
                .ok_or(TranscriptionError::NoAlternatives(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Transcript::from_segments(segments))
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn transcribe(&self, audio: &AudioBuffer) -> Result<Transcript, TranscriptionError> {
        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: audio.encoding.as_str(),
                sample_rate_hertz: audio.sample_rate_hz,
                audio_channel_count: audio.channels,
                language_code: &self.language_code,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(&audio.data),
            },
        };

        tracing::debug!(
            sample_rate_hz = audio.sample_rate_hz,
            bytes = audio.data.len(),
            "Sending audio to speech recognition backend"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::BackendRejected { status, body });
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        let segments = parsed.results.len();
        let transcript = join_top_alternatives(parsed.results)?;

        tracing::info!(
            segments = segments,
            chars = transcript.as_str().len(),
            "Speech recognition completed"
        );

        Ok(transcript)
    }
}
