//! Error types for the jarvis assistant.

use jarvis_knowledge::KnowledgeError;

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// Audio device or stream error.
    #[error("audio error: {0}")]
    Audio(String),

    /// Speech-to-text transcription error.
    #[error("STT error: {0}")]
    Stt(String),

    /// Text-to-speech synthesis error.
    #[error("TTS error: {0}")]
    Tts(String),

    /// Model download or loading error.
    #[error("model error: {0}")]
    Model(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Knowledge lookup failure that the action could not answer itself.
    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssistantError {
    /// Short spoken apology used when an action fails at the handler boundary.
    pub fn apology(&self) -> &'static str {
        match self {
            Self::Knowledge(_) => "Sorry, an error occurred while searching Wikipedia.",
            _ => "Sorry, something went wrong while handling that.",
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AssistantError>;
