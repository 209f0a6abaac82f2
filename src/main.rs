use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use medroute::application::services::RequestDispatcher;
use medroute::infrastructure::audio::{GoogleSpeechEngine, WavSpool};
use medroute::infrastructure::llm::ChatCompletionClient;
use medroute::infrastructure::models::load_classifiers;
use medroute::infrastructure::observability::{TracingConfig, init_tracing};
use medroute::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let classifiers = load_classifiers(&settings.models.dir).context("Failed to load models")?;

    let transcription_engine = Arc::new(
        GoogleSpeechEngine::new(
            &settings.speech.endpoint,
            &settings.speech.api_key,
            &settings.speech.language_code,
            Duration::from_secs(settings.speech.timeout_secs),
        )
        .context("Failed to build speech client")?,
    );

    let llm_client = Arc::new(
        ChatCompletionClient::new(&settings.completion)
            .context("Failed to build completion client")?,
    );

    let dispatcher = RequestDispatcher::new(classifiers, transcription_engine, llm_client)
        .with_reply_seed(settings.chat.seed);

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
        wav_spool: Arc::new(WavSpool::new(
            settings.speech.spool_dir.clone(),
            settings.speech.sample_rate_hz,
        )),
        max_upload_bytes: settings.server.max_upload_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
