//! Speech input: the source of utterances.
//!
//! [`SpeechInput`] is what the dispatcher listens through. Two backends exist:
//! [`MicrophoneInput`] (cpal capture, energy VAD, Parakeet transcription) and
//! [`ConsoleInput`] (typed lines on stdin).

mod console;
mod microphone;
mod parakeet;

pub use console::ConsoleInput;
pub use microphone::MicrophoneInput;
pub use parakeet::{ParakeetStt, STT_MODEL_FILES};

use crate::utterance::Utterance;
use async_trait::async_trait;
use std::time::Duration;

/// Bounds on one listen cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenLimits {
    /// How long to wait for speech to start.
    pub timeout: Duration,
    /// Maximum length of the phrase once started.
    pub phrase_limit: Duration,
}

impl Default for ListenLimits {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            phrase_limit: Duration::from_secs(5),
        }
    }
}

/// A source of normalized utterances.
///
/// Implementations never fail to the caller: silence, timeouts and device
/// errors come back as [`Utterance::NoInput`], speech that yields no words as
/// [`Utterance::Unintelligible`].
#[async_trait]
pub trait SpeechInput: Send {
    /// Listen for one phrase within `limits`.
    async fn listen(&mut self, limits: ListenLimits) -> Utterance;
}
