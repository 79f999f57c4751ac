//! The unit of input the dispatcher works on.

/// Normalized text from one listen cycle, or the "no input" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// Lower-cased, trimmed, whitespace-collapsed text. Never empty.
    Text(String),
    /// Silence, timeout or a capture failure.
    NoInput,
    /// Speech was heard but produced no words. Never matches a rule.
    Unintelligible,
}

impl Utterance {
    /// Normalize a raw transcript. Blank input becomes [`Utterance::NoInput`].
    pub fn from_transcript(raw: &str) -> Self {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            Self::NoInput
        } else {
            Self::Text(normalized)
        }
    }

    /// The normalized text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::NoInput | Self::Unintelligible => None,
        }
    }

    /// Number of whitespace-separated words (0 for the sentinel).
    pub fn word_count(&self) -> usize {
        self.text().map_or(0, |t| t.split_whitespace().count())
    }
}

/// Lower-case, trim and collapse internal whitespace to single spaces.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip leading and trailing punctuation and whitespace.
///
/// Transcripts arrive punctuated ("friday.", ", albert einstein?"); names
/// and topics taken from them should not carry it.
pub fn trim_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
}
