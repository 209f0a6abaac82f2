#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::Router;

use medroute::application::ports::{
    Classifier, ClassifierError, CompletionError, LlmClient, TranscriptionEngine,
    TranscriptionError,
};
use medroute::application::services::{ClassifierAdapter, RequestDispatcher};
use medroute::domain::{AudioBuffer, DiagnosticDomain, Transcript};
use medroute::infrastructure::audio::WavSpool;
use medroute::infrastructure::models::load_classifiers;
use medroute::presentation::{AppState, create_router};

pub const TEST_SEED: u64 = 7;
pub const TEST_MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;
pub const MULTIPART_BOUNDARY: &str = "medroute-test-boundary";

pub struct StubTranscriptionEngine {
    transcript: Option<String>,
}

impl StubTranscriptionEngine {
    pub fn returning(text: &str) -> Self {
        Self {
            transcript: Some(text.to_string()),
        }
    }

    pub fn unreachable() -> Self {
        Self { transcript: None }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for StubTranscriptionEngine {
    async fn transcribe(&self, _audio: &AudioBuffer) -> Result<Transcript, TranscriptionError> {
        match &self.transcript {
            Some(text) => Ok(Transcript::new(text.clone())),
            None => Err(TranscriptionError::ApiRequestFailed(
                "connection refused by 10.0.0.5".to_string(),
            )),
        }
    }
}

pub enum StubReply {
    Text(String),
    Rejected { status: u16, body: String },
    Malformed,
}

pub struct StubLlmClient {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubLlmClient {
    pub fn replying(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Rejected { status, body } => Err(CompletionError::UpstreamRejection {
                status: *status,
                body: body.clone(),
            }),
            StubReply::Malformed => Err(CompletionError::MalformedResponse(
                "response has no choices".to_string(),
            )),
        }
    }
}

pub struct FixedClassifier(pub i64);

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &[f64]) -> Result<i64, ClassifierError> {
        Ok(self.0)
    }
}

pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &[f64]) -> Result<i64, ClassifierError> {
        Err(ClassifierError::PredictionFailed(
            "weights file corrupted at /srv/models".to_string(),
        ))
    }
}

/// Records the vector it receives and answers 1.
#[derive(Default)]
pub struct RecordingClassifier {
    pub seen: Mutex<Vec<Vec<f64>>>,
}

impl Classifier for RecordingClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        self.seen.lock().unwrap().push(features.to_vec());
        Ok(1)
    }
}

pub fn models_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models")
}

pub fn repo_classifiers() -> ClassifierAdapter {
    load_classifiers(&models_dir()).expect("bundled models load")
}

pub fn uniform_classifiers(model: Arc<dyn Classifier>) -> ClassifierAdapter {
    DiagnosticDomain::ALL
        .into_iter()
        .fold(ClassifierAdapter::new(), |adapter, domain| {
            adapter.with_model(domain, Arc::clone(&model))
        })
}

pub fn create_dispatcher(
    classifiers: ClassifierAdapter,
    engine: Arc<dyn TranscriptionEngine>,
    llm: Arc<dyn LlmClient>,
) -> RequestDispatcher {
    RequestDispatcher::new(classifiers, engine, llm).with_reply_seed(Some(TEST_SEED))
}

pub fn create_test_app(
    classifiers: ClassifierAdapter,
    engine: Arc<dyn TranscriptionEngine>,
    llm: Arc<dyn LlmClient>,
) -> Router {
    create_test_app_with_upload_limit(classifiers, engine, llm, TEST_MAX_UPLOAD_BYTES)
}

pub fn create_test_app_with_upload_limit(
    classifiers: ClassifierAdapter,
    engine: Arc<dyn TranscriptionEngine>,
    llm: Arc<dyn LlmClient>,
    max_upload_bytes: usize,
) -> Router {
    let state = AppState {
        dispatcher: Arc::new(create_dispatcher(classifiers, engine, llm)),
        wav_spool: Arc::new(WavSpool::new(None, 44_100)),
        max_upload_bytes,
    };
    create_router(state)
}

pub fn default_test_app() -> Router {
    create_test_app(
        repo_classifiers(),
        Arc::new(StubTranscriptionEngine::returning("headache and fever")),
        Arc::new(StubLlmClient::replying("Take paracetamol and rest.")),
    )
}

/// 16-bit mono PCM WAV file in memory.
pub fn wav_bytes(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for sample in samples {
            writer.write_sample(*sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

pub fn multipart_body(field_name: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"speech.wav\"\r\nContent-Type: audio/wav\r\n\r\n",
            MULTIPART_BOUNDARY, field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY)
}
