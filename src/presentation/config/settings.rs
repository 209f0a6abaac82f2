use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;
use crate::domain::DEFAULT_SAMPLE_RATE_HZ;
use crate::infrastructure::audio::DEFAULT_SPEECH_ENDPOINT;
use crate::infrastructure::llm::DEFAULT_COMPLETION_ENDPOINT;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub completion: CompletionSettings,
    pub speech: SpeechSettings,
    pub models: ModelSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub endpoint: String,
    pub api_key: String,
    pub language_code: String,
    pub sample_rate_hz: u32,
    pub timeout_secs: u64,
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatSettings {
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.*` and `APP_*` variables
    /// (`__` separates sections, e.g. `APP_COMPLETION__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.max_upload_bytes", 16_i64 * 1024 * 1024)?
            .set_default("completion.endpoint", DEFAULT_COMPLETION_ENDPOINT)?
            .set_default("completion.api_key", "")?
            .set_default("completion.model", "mistral-small-latest")?
            .set_default("completion.temperature", 1.0_f64)?
            .set_default("completion.top_p", 1.0_f64)?
            .set_default("completion.max_tokens", 250_i64)?
            .set_default("completion.timeout_secs", 30_i64)?
            .set_default("speech.endpoint", DEFAULT_SPEECH_ENDPOINT)?
            .set_default("speech.api_key", "")?
            .set_default("speech.language_code", "en-US")?
            .set_default("speech.sample_rate_hz", i64::from(DEFAULT_SAMPLE_RATE_HZ))?
            .set_default("speech.timeout_secs", 30_i64)?
            .set_default("models.dir", "models")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Credentials are never defaulted; startup stops when one is absent.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.completion.api_key.trim().is_empty() {
            return Err(SettingsError::MissingSecret {
                key: "completion.api_key",
                env_var: "APP_COMPLETION__API_KEY",
            });
        }
        if self.speech.api_key.trim().is_empty() {
            return Err(SettingsError::MissingSecret {
                key: "speech.api_key",
                env_var: "APP_SPEECH__API_KEY",
            });
        }
        if self.completion.timeout_secs == 0 || self.speech.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("missing secret {key}; set {env_var}")]
    MissingSecret {
        key: &'static str,
        env_var: &'static str,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
