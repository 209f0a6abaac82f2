mod google_speech_engine;
mod wav_spool;

pub use google_speech_engine::{DEFAULT_SPEECH_ENDPOINT, GoogleSpeechEngine};
pub use wav_spool::WavSpool;
