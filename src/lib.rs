//! Jarvis: a voice-driven command dispatcher.
//!
//! The assistant listens for a phrase, matches it against an ordered table
//! of intents and runs the first match:
//! Microphone → VAD → STT → intent table → action → speech
//!
//! # Architecture
//!
//! - **Speech input** ([`stt`]): microphone capture via `cpal`, energy VAD,
//!   Parakeet transcription, or typed lines
//! - **Intents** ([`intent`]): substring triggers evaluated in priority order
//! - **Actions** ([`actions`]): canned replies, browser navigation, time,
//!   renaming, jokes and Wikipedia summaries (via `jarvis-knowledge`)
//! - **Speech output** ([`tts`]): a system speech program, or the console
//! - **Dispatcher** ([`dispatcher`]): the listen → match → act loop

pub mod actions;
pub mod app_dirs;
pub mod audio;
pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod desktop;
pub mod dispatcher;
pub mod error;
pub mod intent;
pub mod models;
pub mod session;
pub mod startup;
pub mod stt;
pub mod tts;
pub mod utterance;
pub mod vad;

pub use config::AssistantConfig;
pub use dispatcher::{Adapters, DispatchSettings, Dispatcher};
pub use error::{AssistantError, Result};
pub use intent::{IntentRule, IntentTable, Trigger};
pub use session::SessionState;
pub use utterance::Utterance;
