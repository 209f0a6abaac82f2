mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChatSettings, CompletionSettings, LoggingSettings, ModelSettings, ServerSettings, Settings,
    SettingsError, SpeechSettings,
};
