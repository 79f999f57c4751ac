//! Substring triggers.

use crate::utterance::{Utterance, normalize};

/// A predicate over a normalized utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Satisfied when the utterance contains the phrase.
    Phrase(String),
    /// Satisfied when the utterance contains every phrase, in any order.
    AllOf(Vec<String>),
}

impl Trigger {
    /// Single-phrase trigger. The phrase is normalized like an utterance.
    pub fn phrase(phrase: &str) -> Self {
        Self::Phrase(normalize(phrase))
    }

    /// All-of trigger. Each phrase is normalized; blank phrases are dropped.
    pub fn all_of<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::AllOf(
            phrases
                .iter()
                .map(|p| normalize(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    /// Whether this trigger fires for `utterance`. The sentinel never matches.
    pub fn matches(&self, utterance: &Utterance) -> bool {
        let Some(text) = utterance.text() else {
            return false;
        };
        match self {
            Self::Phrase(phrase) => !phrase.is_empty() && text.contains(phrase.as_str()),
            Self::AllOf(phrases) => {
                !phrases.is_empty() && phrases.iter().all(|p| text.contains(p.as_str()))
            }
        }
    }
}
