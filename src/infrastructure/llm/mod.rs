mod chat_completion_client;

pub use chat_completion_client::{
    ChatCompletionClient, DEFAULT_COMPLETION_ENDPOINT, build_symptom_prompt,
};
