mod audio_buffer;
mod chat_message;
mod diagnostic_domain;
mod diagnostic_result;
mod feature_vector;
mod transcript;

pub use audio_buffer::{AudioBuffer, AudioEncoding, DEFAULT_SAMPLE_RATE_HZ};
pub use chat_message::ChatMessage;
pub use diagnostic_domain::DiagnosticDomain;
pub use diagnostic_result::{DiagnosticResult, Label};
pub use feature_vector::FeatureVector;
pub use transcript::Transcript;
