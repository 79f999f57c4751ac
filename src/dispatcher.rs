//! The listen → match → act loop.
//!
//! The dispatcher owns the adapters and the intent table. Each turn it
//! listens once, resolves the first matching rule and runs its action. The
//! sentinel and unmatched utterances produce no output. Action errors are
//! turned into a spoken apology and never end the session.

use crate::actions::{self, ActionOutcome, Flow, responses};
use crate::clock::Clock;
use crate::config::AssistantConfig;
use crate::desktop::Desktop;
use crate::intent::IntentTable;
use crate::session::SessionState;
use crate::stt::{ListenLimits, SpeechInput};
use crate::tts::SpeechOutput;
use crate::utterance::Utterance;
use jarvis_knowledge::KnowledgeSource;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Unmatched utterances longer than this many words are logged at debug.
const NOTABLE_UNMATCHED_WORDS: usize = 2;

/// The collaborators an assistant session talks to.
pub struct Adapters {
    pub input: Box<dyn SpeechInput>,
    pub output: Box<dyn SpeechOutput>,
    pub knowledge: Arc<dyn KnowledgeSource>,
    pub desktop: Box<dyn Desktop>,
    pub clock: Box<dyn Clock>,
}

impl Adapters {
    /// Listen once. Unintelligible speech is apologised for and reported as
    /// the sentinel.
    pub async fn listen(&mut self, limits: ListenLimits) -> Utterance {
        match self.input.listen(limits).await {
            Utterance::Unintelligible => {
                self.output.speak(responses::UNINTELLIGIBLE).await;
                Utterance::NoInput
            }
            utterance => utterance,
        }
    }
}

/// Limits applied while dispatching.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Limits for every listen, including follow-up questions.
    pub listen: ListenLimits,
    /// Overall bound on one knowledge lookup.
    pub knowledge_timeout: Duration,
    /// Sentences requested from the knowledge source.
    pub max_sentences: usize,
    /// Options read out for an ambiguous topic.
    pub max_options: usize,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl DispatchSettings {
    /// Settings from the `listen` and `knowledge` config sections.
    pub fn from_config(config: &AssistantConfig) -> Self {
        Self {
            listen: config.listen.limits(),
            knowledge_timeout: config.knowledge.timeout(),
            max_sentences: config.knowledge.max_sentences,
            max_options: config.knowledge.max_options,
        }
    }
}

/// Runs the command loop.
pub struct Dispatcher {
    table: IntentTable,
    adapters: Adapters,
    settings: DispatchSettings,
}

impl Dispatcher {
    pub fn new(table: IntentTable, adapters: Adapters, settings: DispatchSettings) -> Self {
        Self {
            table,
            adapters,
            settings,
        }
    }

    /// The adapters, e.g. for the start-up greeting.
    pub fn adapters_mut(&mut self) -> &mut Adapters {
        &mut self.adapters
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Loop until an action terminates the session or `cancel` fires.
    ///
    /// Returns the final session state.
    pub async fn run(&mut self, mut state: SessionState, cancel: CancellationToken) -> SessionState {
        info!(rules = self.table.len(), "dispatcher started");
        loop {
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    info!("dispatcher cancelled");
                    return state;
                }
                outcome = self.turn(state.clone()) => outcome,
            };
            state = outcome.state;
            if outcome.flow == Flow::Terminate {
                info!("session ended");
                return state;
            }
        }
    }

    /// Listen once and dispatch what was heard.
    pub async fn turn(&mut self, state: SessionState) -> ActionOutcome {
        let utterance = self.adapters.listen(self.settings.listen).await;
        self.dispatch(&utterance, state).await
    }

    /// Dispatch one utterance.
    pub async fn dispatch(&mut self, utterance: &Utterance, state: SessionState) -> ActionOutcome {
        let Some(text) = utterance.text() else {
            trace!("no input");
            return ActionOutcome::proceed(state);
        };

        let Some(rule) = self.table.resolve(utterance) else {
            if utterance.word_count() > NOTABLE_UNMATCHED_WORDS {
                debug!(utterance = text, "no intent matched");
            } else {
                trace!(utterance = text, "ignoring short unmatched utterance");
            }
            return ActionOutcome::proceed(state);
        };

        debug!(intent = %rule.name, "intent matched");
        match actions::perform(
            &rule.action,
            text,
            state.clone(),
            &mut self.adapters,
            &self.settings,
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(intent = %rule.name, "action failed: {e}");
                self.adapters.output.speak(e.apology()).await;
                ActionOutcome::proceed(state)
            }
        }
    }
}
