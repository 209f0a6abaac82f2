use std::sync::Arc;

use crate::application::services::RequestDispatcher;
use crate::infrastructure::audio::WavSpool;

/// Shared, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<RequestDispatcher>,
    pub wav_spool: Arc<WavSpool>,
    pub max_upload_bytes: usize,
}
