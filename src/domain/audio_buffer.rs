pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    /// Signed 16-bit little-endian PCM.
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}

/// A single recorded utterance, owned by one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub data: Vec<u8>,
    pub encoding: AudioEncoding,
    pub sample_rate_hz: u32,
    pub channels: u16,
}

impl AudioBuffer {
    pub fn linear16(data: Vec<u8>, sample_rate_hz: u32, channels: u16) -> Self {
        Self {
            data,
            encoding: AudioEncoding::Linear16,
            sample_rate_hz,
            channels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
