use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::application::ports::{
    CompletionError, LlmClient, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioBuffer, ChatMessage, DiagnosticDomain, DiagnosticResult, Transcript};

use super::classifier_adapter::{ClassificationError, ClassifierAdapter};
use super::feature_validator::{ValidationError, validate_features};
use super::rule_based_responder::RuleBasedResponder;

/// Wires each request to the components it needs. Holds no per-request
/// state, so one instance is shared by every worker. The only mutable part
/// is the optional seeded reply generator.
pub struct RequestDispatcher {
    classifiers: ClassifierAdapter,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    responder: RuleBasedResponder,
    reply_rng: Option<Mutex<StdRng>>,
}

impl RequestDispatcher {
    pub fn new(
        classifiers: ClassifierAdapter,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            classifiers,
            transcription_engine,
            llm_client,
            responder: RuleBasedResponder::new(),
            reply_rng: None,
        }
    }

    /// Fallback chat replies are drawn in turn from one generator seeded
    /// with `seed`, so a fresh dispatcher replays the same reply sequence.
    pub fn with_reply_seed(mut self, seed: Option<u64>) -> Self {
        self.reply_rng = seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    #[tracing::instrument(skip(self, payload))]
    pub fn diagnose(
        &self,
        domain: DiagnosticDomain,
        payload: &Value,
    ) -> Result<DiagnosticResult, DispatchError> {
        let vector = validate_features(domain, payload)?;
        let label = self.classifiers.classify(domain, &vector)?;

        tracing::info!(label = label.as_u8(), "Diagnosis completed");

        Ok(DiagnosticResult::new(domain, label))
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.data.len()))]
    pub async fn advise_from_speech(
        &self,
        audio: &AudioBuffer,
    ) -> Result<SpeechAdvice, DispatchError> {
        let transcript = self.transcription_engine.transcribe(audio).await?;
        let suggestion = self.llm_client.complete(transcript.as_str()).await?;

        tracing::info!(
            transcript_chars = transcript.as_str().len(),
            reply_chars = suggestion.len(),
            "Speech advice completed"
        );

        Ok(SpeechAdvice {
            recognized_text: transcript,
            suggested_medicines: suggestion,
        })
    }

    pub fn chat(&self, message: &ChatMessage) -> String {
        let reply = match &self.reply_rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                self.responder.respond(message, &mut *rng)
            }
            None => self.responder.respond(message, &mut StdRng::from_entropy()),
        };

        reply.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAdvice {
    pub recognized_text: Transcript,
    pub suggested_medicines: String,
}

/// Whether the client can fix the request on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    ClientFault,
    ServerFault,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("classification: {0}")]
    Classification(#[from] ClassificationError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
}

impl DispatchError {
    pub fn outcome(&self) -> Outcome {
        match self {
            DispatchError::Validation(_) => Outcome::ClientFault,
            DispatchError::Classification(_)
            | DispatchError::Transcription(_)
            | DispatchError::Completion(_) => Outcome::ServerFault,
        }
    }
}
