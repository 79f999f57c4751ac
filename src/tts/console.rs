use super::SpeechOutput;
use async_trait::async_trait;

/// Prints speech as `{Assistant}: text`.
pub struct ConsoleVoice {
    label: String,
}

impl ConsoleVoice {
    /// Console output labelled with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for ConsoleVoice {
    fn default() -> Self {
        Self::new("Assistant")
    }
}

#[async_trait]
impl SpeechOutput for ConsoleVoice {
    async fn speak(&mut self, text: &str) {
        println!("{}: {text}", self.label);
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
