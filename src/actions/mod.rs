//! Intent actions.
//!
//! Every action takes the session state by value and returns the state the
//! next turn should see, together with whether the session continues. Errors
//! bubble to the dispatcher, which apologises and keeps going.

pub mod jokes;
mod knowledge;
pub mod responses;

use crate::clock::format_12h;
use crate::dispatcher::{Adapters, DispatchSettings};
use crate::error::Result;
use crate::session::SessionState;
use crate::utterance::{normalize, trim_punctuation};
use tracing::{debug, info};

/// What a rule does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Say goodbye and end the session.
    Exit,
    /// Summarise the rest of the utterance from the encyclopedia.
    Wikipedia,
    /// Optionally announce, then open a URL.
    OpenUrl {
        url: String,
        announcement: Option<String>,
    },
    /// Report the current time.
    TellTime,
    /// Speak a fixed reply (`{assistant}` is substituted).
    Reply(String),
    /// Rename the assistant to the text after "change my name to".
    Rename,
    /// Say the assistant's current name.
    TellName,
    /// Print and speak a random joke.
    Joke,
    /// Explain that locking the screen is left to the user.
    LockScreen,
}

/// Whether the session keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Result of one dispatched utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: SessionState,
    pub flow: Flow,
}

impl ActionOutcome {
    /// Keep listening with `state`.
    pub fn proceed(state: SessionState) -> Self {
        Self {
            state,
            flow: Flow::Continue,
        }
    }

    /// End the session with `state`.
    pub fn terminate(state: SessionState) -> Self {
        Self {
            state,
            flow: Flow::Terminate,
        }
    }
}

const RENAME_PHRASE: &str = "change my name to";

/// The name following the first "change my name to", without punctuation.
fn renamed_to(text: &str) -> String {
    text.split_once(RENAME_PHRASE)
        .map(|(_, rest)| trim_punctuation(&normalize(rest)).to_owned())
        .unwrap_or_default()
}

/// Run `action` for the normalized utterance `text`.
///
/// # Errors
///
/// Returns an error when an adapter fails in a way the action cannot phrase
/// itself (for example a knowledge lookup timing out).
pub async fn perform(
    action: &Action,
    text: &str,
    state: SessionState,
    adapters: &mut Adapters,
    settings: &DispatchSettings,
) -> Result<ActionOutcome> {
    let output = &mut adapters.output;
    match action {
        Action::Exit => {
            output.speak(responses::FAREWELL).await;
            info!("exit requested");
            Ok(ActionOutcome::terminate(state))
        }
        Action::Wikipedia => knowledge::lookup(text, state, adapters, settings).await,
        Action::OpenUrl { url, announcement } => {
            if let Some(announcement) = announcement {
                output
                    .speak(&responses::personalize(announcement, &state.assistant_name))
                    .await;
            }
            adapters.desktop.open_url(url);
            Ok(ActionOutcome::proceed(state))
        }
        Action::TellTime => {
            let now = format_12h(adapters.clock.now());
            output.speak(&responses::time_report(&now)).await;
            Ok(ActionOutcome::proceed(state))
        }
        Action::Reply(template) => {
            output
                .speak(&responses::personalize(template, &state.assistant_name))
                .await;
            Ok(ActionOutcome::proceed(state))
        }
        Action::Rename => {
            let name = renamed_to(text);
            if name.is_empty() {
                output.speak(responses::RENAME_MISSING).await;
                return Ok(ActionOutcome::proceed(state));
            }
            debug!("assistant renamed");
            output.speak(&responses::renamed(&name)).await;
            Ok(ActionOutcome::proceed(state.renamed(name)))
        }
        Action::TellName => {
            output.speak(&responses::my_name(&state.assistant_name)).await;
            Ok(ActionOutcome::proceed(state))
        }
        Action::Joke => {
            let joke = jokes::random();
            output.show(joke);
            output.speak(joke).await;
            Ok(ActionOutcome::proceed(state))
        }
        Action::LockScreen => {
            output.speak(responses::LOCK_UNSUPPORTED).await;
            output.speak(responses::LOCK_ADVICE).await;
            for hint in responses::LOCK_HINTS {
                output.show(hint);
            }
            Ok(ActionOutcome::proceed(state))
        }
    }
}
