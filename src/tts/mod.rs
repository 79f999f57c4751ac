//! Speech output: how the assistant talks back.
//!
//! [`SystemVoice`] drives a speech program already installed on the host
//! (`espeak-ng`, `say`, SAPI, ...). [`ConsoleVoice`] prints instead.

mod console;
mod system;

pub use console::ConsoleVoice;
pub use system::{EngineKind, SystemVoice};

use async_trait::async_trait;

/// A sink for assistant speech.
///
/// `speak` never fails to the caller; a broken engine degrades to printing.
#[async_trait]
pub trait SpeechOutput: Send {
    /// Say `text` and return once playback has finished.
    async fn speak(&mut self, text: &str);

    /// Print a transcript-only line (not spoken).
    fn show(&mut self, text: &str);
}
