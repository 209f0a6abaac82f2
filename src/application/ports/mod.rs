mod classifier;
mod llm_client;
mod transcription_engine;

pub use classifier::{Classifier, ClassifierError};
pub use llm_client::{CompletionError, LlmClient};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
