//! Session start-up: model downloads, adapter construction, and the run itself.
//!
//! Call [`build_adapters`] once, then [`run_session`] to greet the user and
//! dispatch commands until the session ends.

use crate::bootstrap::{self, GreetOptions};
use crate::clock::SystemClock;
use crate::config::{AssistantConfig, ListenBackend, TtsBackend};
use crate::desktop::SystemDesktop;
use crate::dispatcher::{Adapters, DispatchSettings, Dispatcher};
use crate::error::{AssistantError, Result};
use crate::intent::IntentTable;
use crate::models::ModelManager;
use crate::session::SessionState;
use crate::stt::{ConsoleInput, MicrophoneInput, STT_MODEL_FILES, SpeechInput};
use crate::tts::{ConsoleVoice, SpeechOutput, SystemVoice};
use jarvis_knowledge::WikipediaSource;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Download the STT model files with progress bars.
///
/// Already-cached files are reported and skipped. Blocking.
///
/// # Errors
///
/// Returns an error if any download fails.
pub fn download_models(config: &AssistantConfig) -> Result<PathBuf> {
    let manager = ModelManager::new(&config.models)?;
    println!("Speech-to-text model ({}):", config.stt.model_id);
    manager.download_repo_with_progress(&config.stt.model_id, &STT_MODEL_FILES)
}

/// Build the real adapters for `config`.
///
/// With the microphone backend this downloads and loads the STT model first,
/// which can take a while on first run.
///
/// # Errors
///
/// Returns an error if the microphone, the STT model or the knowledge client
/// cannot be set up.
pub async fn build_adapters(config: &AssistantConfig) -> Result<Adapters> {
    let input: Box<dyn SpeechInput> = match config.listen.backend {
        ListenBackend::Console => Box::new(ConsoleInput::new()),
        ListenBackend::Microphone => {
            let started = Instant::now();
            let owned = config.clone();
            let mic = tokio::task::spawn_blocking(move || {
                download_models(&owned)?;
                MicrophoneInput::new(&owned)
            })
            .await
            .map_err(|e| AssistantError::Stt(format!("model loading task failed: {e}")))??;
            info!("microphone ready in {:.1}s", started.elapsed().as_secs_f32());
            Box::new(mic)
        }
    };

    let output: Box<dyn SpeechOutput> = match config.tts.backend {
        TtsBackend::System => Box::new(SystemVoice::new(&config.tts)),
        TtsBackend::Console => Box::new(ConsoleVoice::new(config.assistant.name.clone())),
    };

    let knowledge = WikipediaSource::new(config.knowledge.to_knowledge_config())
        .map_err(|e| AssistantError::Config(format!("knowledge: {e}")))?;

    Ok(Adapters {
        input,
        output,
        knowledge: Arc::new(knowledge),
        desktop: Box::new(SystemDesktop),
        clock: Box::new(SystemClock),
    })
}

/// Greet the user, then dispatch commands until exit or cancellation.
///
/// # Errors
///
/// Returns an error if a custom intent in `config` is invalid.
pub async fn run_session(
    config: &AssistantConfig,
    adapters: Adapters,
    cancel: CancellationToken,
) -> Result<SessionState> {
    let table = IntentTable::with_custom(&config.intents.custom)?;
    let settings = DispatchSettings::from_config(config);
    let options = GreetOptions {
        clear_screen: config.assistant.clear_screen_on_start,
        ask_user_name: config.assistant.ask_user_name,
        listen: settings.listen,
    };
    let mut dispatcher = Dispatcher::new(table, adapters, settings);

    let state = SessionState::new(config.assistant.name.clone());
    let state = tokio::select! {
        biased;
        () = cancel.cancelled() => return Ok(state),
        state = bootstrap::greet(dispatcher.adapters_mut(), state.clone(), options) => state,
    };

    Ok(dispatcher.run(state, cancel).await)
}
