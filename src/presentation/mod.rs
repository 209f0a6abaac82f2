pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, SettingsError};
pub use error::ErrorResponse;
pub use router::create_router;
pub use state::AppState;
