use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::application::ports::TranscriptionError;
use crate::domain::AudioBuffer;

const DECODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Stages an uploaded WAV file on disk and reads its PCM frames back out.
///
/// The staging file lives only inside the blocking decode task; it is
/// removed when the handle drops, on success and on every error path.
#[derive(Debug, Clone)]
pub struct WavSpool {
    dir: Option<PathBuf>,
    expected_sample_rate_hz: u32,
}

impl WavSpool {
    pub fn new(dir: Option<PathBuf>, expected_sample_rate_hz: u32) -> Self {
        Self {
            dir,
            expected_sample_rate_hz,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn load(&self, data: Vec<u8>) -> Result<AudioBuffer, TranscriptionError> {
        let dir = self.dir.clone();

        let buffer = tokio::time::timeout(
            DECODE_TIMEOUT,
            tokio::task::spawn_blocking(move || spool_and_decode(dir.as_deref(), &data)),
        )
        .await
        .map_err(|_| TranscriptionError::DecodingFailed("wav decoding timed out".to_string()))?
        .map_err(|e| TranscriptionError::DecodingFailed(format!("task join error: {e}")))??;

        if buffer.sample_rate_hz != self.expected_sample_rate_hz {
            tracing::warn!(
                expected = self.expected_sample_rate_hz,
                actual = buffer.sample_rate_hz,
                "Uploaded audio sample rate differs from the configured rate"
            );
        }

        Ok(buffer)
    }
}

fn spool_and_decode(dir: Option<&Path>, data: &[u8]) -> Result<AudioBuffer, TranscriptionError> {
    let mut file = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .map_err(|e| TranscriptionError::DecodingFailed(format!("spool: {}", e)))?;

    file.write_all(data)
        .and_then(|_| file.flush())
        .map_err(|e| TranscriptionError::DecodingFailed(format!("spool write: {}", e)))?;

    tracing::debug!(path = %file.path().display(), "Audio upload spooled");

    read_linear16(file.path(), data.len())
}

/// `upload_len` bounds the frame buffer; the header's declared length is
/// not trusted for allocation.
fn read_linear16(path: &Path, upload_len: usize) -> Result<AudioBuffer, TranscriptionError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| TranscriptionError::DecodingFailed(format!("wav header: {}", e)))?;

    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(TranscriptionError::DecodingFailed(format!(
            "expected 16-bit linear PCM, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let declared = (reader.len() as usize).saturating_mul(2);
    let mut data = Vec::with_capacity(declared.min(upload_len));
    for sample in reader.into_samples::<i16>() {
        let sample =
            sample.map_err(|e| TranscriptionError::DecodingFailed(format!("wav frames: {}", e)))?;
        data.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(AudioBuffer::linear16(data, spec.sample_rate, spec.channels))
}
