mod chatbot;
mod diagnosis;
mod health;
mod home;
mod speech;

pub use chatbot::chatbot_handler;
pub use diagnosis::{diabetes_handler, heart_handler, kidney_handler, liver_handler};
pub use health::health_handler;
pub use home::{WELCOME_MESSAGE, home_handler};
pub use speech::{AUDIO_FIELD, process_speech_handler};
