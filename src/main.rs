use std::sync::Arc;

use anyhow::anyhow;
use dotenvy::dotenv;
use tracing::info;

use audio_transcribe::app;
use audio_transcribe::config::env::{self, EnvKey};
use audio_transcribe::infrastructure::observability::{LogFormat, init_tracing};
use audio_transcribe::infrastructure::transcribe::AwsTranscribeService;
use audio_transcribe::modules::transcribe::observer::TracingObserver;
use audio_transcribe::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(env::get_parsed(EnvKey::LogFormat, LogFormat::Text));

    info!("Starting audio transcribe function...");

    let endpoint = env::get_opt(EnvKey::TranscribeEndpoint);
    let transcriber = AwsTranscribeService::new(endpoint.as_deref()).await;

    let state = AppState::new(Arc::new(transcriber), Arc::new(TracingObserver));

    app::run(state)
        .await
        .map_err(|e| anyhow!("Lambda runtime stopped: {}", e))
}
