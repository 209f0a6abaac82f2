pub mod audio;
pub mod llm;
pub mod models;
pub mod observability;
