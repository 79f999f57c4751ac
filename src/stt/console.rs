//! Typed input on stdin.

use super::{ListenLimits, SpeechInput};
use crate::utterance::Utterance;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

/// Reads one line per listen from stdin.
///
/// The wait for a line is bounded by the listen timeout plus the phrase limit.
/// Running out of time or input yields the sentinel.
pub struct ConsoleInput {
    lines: Lines<BufReader<Stdin>>,
    prompt: String,
}

impl ConsoleInput {
    /// Read from the process's stdin with a `You: ` prompt.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            prompt: "You: ".to_owned(),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechInput for ConsoleInput {
    async fn listen(&mut self, limits: ListenLimits) -> Utterance {
        print!("{}", self.prompt);
        let _ = std::io::stdout().flush();

        // A typed line gets the whole listen budget.
        let budget = limits.timeout + limits.phrase_limit;
        match tokio::time::timeout(budget, self.lines.next_line()).await {
            Ok(Ok(Some(line))) => Utterance::from_transcript(&line),
            Ok(Ok(None)) => {
                debug!("stdin closed");
                // Closed stdin: pace the re-listen loop.
                tokio::time::sleep(limits.timeout).await;
                Utterance::NoInput
            }
            Ok(Err(e)) => {
                warn!("failed to read stdin: {e}");
                Utterance::NoInput
            }
            Err(_) => {
                println!();
                Utterance::NoInput
            }
        }
    }
}
