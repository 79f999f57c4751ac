//! Speech through a system text-to-speech program.
//!
//! One child process per utterance. The child is killed if the utterance
//! exceeds its time budget or the future is dropped.

use super::SpeechOutput;
use crate::config::{TtsConfig, TtsEngine};
use crate::error::{AssistantError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Default speaking rate (words per minute) the rate mappings are centred on.
const NEUTRAL_WPM: i64 = 175;

/// Supported speech programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    EspeakNg,
    Espeak,
    SpdSay,
    Say,
    Sapi,
}

impl EngineKind {
    /// Executable name looked up on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::SpdSay => "spd-say",
            Self::Say => "say",
            Self::Sapi => "powershell",
        }
    }

    /// Candidates tried in order for `engine`.
    pub fn candidates(engine: TtsEngine) -> Vec<Self> {
        match engine {
            TtsEngine::Auto if cfg!(target_os = "macos") => vec![Self::Say, Self::EspeakNg],
            TtsEngine::Auto if cfg!(windows) => vec![Self::Sapi, Self::EspeakNg],
            TtsEngine::Auto => vec![Self::EspeakNg, Self::Espeak, Self::SpdSay],
            TtsEngine::EspeakNg => vec![Self::EspeakNg],
            TtsEngine::Espeak => vec![Self::Espeak],
            TtsEngine::SpdSay => vec![Self::SpdSay],
            TtsEngine::Say => vec![Self::Say],
            TtsEngine::Sapi => vec![Self::Sapi],
        }
    }

    /// Command-line arguments. SAPI reads the text from stdin instead.
    pub fn args(self, voice: &str, rate_wpm: u32, text: &str) -> Vec<String> {
        let wpm = i64::from(rate_wpm);
        match self {
            Self::EspeakNg | Self::Espeak => vec![
                "-v".into(),
                voice.into(),
                "-s".into(),
                wpm.to_string(),
                "--".into(),
                text.into(),
            ],
            Self::SpdSay => vec![
                "--wait".into(),
                "-l".into(),
                voice.into(),
                "-r".into(),
                ((wpm - NEUTRAL_WPM) / 2).clamp(-100, 100).to_string(),
                "--".into(),
                text.into(),
            ],
            Self::Say => {
                let mut args = Vec::new();
                if let Some(name) = say_voice(voice) {
                    args.extend(["-v".to_owned(), name]);
                }
                args.extend(["-r".to_owned(), wpm.to_string(), "--".to_owned(), text.to_owned()]);
                args
            }
            Self::Sapi => {
                let rate = ((wpm - NEUTRAL_WPM) / 20).clamp(-10, 10);
                vec![
                    "-NoProfile".into(),
                    "-NonInteractive".into(),
                    "-Command".into(),
                    format!(
                        "Add-Type -AssemblyName System.Speech; \
                         $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                         {}$s.Rate = {rate}; $s.Speak([Console]::In.ReadToEnd())",
                        sapi_voice_selection(voice)
                    ),
                ]
            }
        }
    }
}

/// Language tags like `en`, `en-us` or `en_GB`.
fn is_language_tag(voice: &str) -> bool {
    let mut parts = voice.split(['-', '_']);
    let primary_ok = parts
        .next()
        .is_some_and(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| (2..=4).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Whether `voice` is safe to embed in a PowerShell string literal.
fn is_plain_voice_name(voice: &str) -> bool {
    !voice.is_empty()
        && voice
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.'))
}

/// `say` voice for `voice`.
///
/// A language tag maps to the stock voice for that language; anything else
/// is taken as a voice name.
fn say_voice(voice: &str) -> Option<String> {
    if !is_language_tag(voice) {
        return is_plain_voice_name(voice).then(|| voice.to_owned());
    }
    let primary = voice.split(['-', '_']).next().unwrap_or_default();
    let name = match primary.to_ascii_lowercase().as_str() {
        "en" => "Samantha",
        "de" => "Anna",
        "es" => "Monica",
        "fr" => "Thomas",
        "it" => "Alice",
        _ => return None,
    };
    Some(name.to_owned())
}

/// PowerShell statement picking a SAPI voice, or nothing for an unusable value.
fn sapi_voice_selection(voice: &str) -> String {
    if is_language_tag(voice) {
        let culture = voice.replace('_', "-");
        format!(
            "try {{ $s.SelectVoiceByHints('NotSet', 'NotSet', 0, \
             [System.Globalization.CultureInfo]::GetCultureInfo('{culture}')) }} catch {{ }}; "
        )
    } else if is_plain_voice_name(voice) {
        format!("try {{ $s.SelectVoice('{voice}') }} catch {{ }}; ")
    } else {
        String::new()
    }
}

/// Speech via a system program resolved at start-up.
pub struct SystemVoice {
    engine: Option<(EngineKind, PathBuf)>,
    voice: String,
    rate: u32,
    max_utterance: Duration,
}

impl SystemVoice {
    /// Resolve the configured engine on `PATH`.
    ///
    /// A missing engine is not an error: every `speak` then falls back to
    /// printing the text.
    pub fn new(config: &TtsConfig) -> Self {
        let engine = EngineKind::candidates(config.engine)
            .into_iter()
            .find_map(|kind| which::which(kind.program()).ok().map(|path| (kind, path)));

        match &engine {
            Some((kind, path)) => info!("speech engine: {kind:?} at {}", path.display()),
            None => warn!("no speech engine found for {:?}; speech will be printed", config.engine),
        }

        Self {
            engine,
            voice: config.voice.clone(),
            rate: config.rate,
            max_utterance: Duration::from_secs(config.max_utterance_secs),
        }
    }

    /// The engine in use, if any.
    pub fn engine(&self) -> Option<EngineKind> {
        self.engine.as_ref().map(|(kind, _)| *kind)
    }

    async fn try_speak(&self, text: &str) -> Result<()> {
        let (kind, path) = self
            .engine
            .as_ref()
            .ok_or_else(|| AssistantError::Tts("no speech engine available".into()))?;

        let mut command = Command::new(path);
        command
            .args(kind.args(&self.voice, self.rate, text))
            .stdin(if *kind == EngineKind::Sapi {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command
            .spawn()
            .map_err(|e| AssistantError::Tts(format!("failed to spawn {}: {e}", kind.program())))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Closing stdin ends the input stream.
            drop(stdin);
        }

        let output = tokio::time::timeout(self.max_utterance, child.wait_with_output())
            .await
            .map_err(|_| {
                AssistantError::Tts(format!(
                    "{} timed out after {}s",
                    kind.program(),
                    self.max_utterance.as_secs()
                ))
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AssistantError::Tts(format!(
                "{} exited with {}: {}",
                kind.program(),
                output.status,
                stderr.trim()
            )));
        }
        debug!("spoke {} chars", text.len());
        Ok(())
    }
}

#[async_trait]
impl SpeechOutput for SystemVoice {
    async fn speak(&mut self, text: &str) {
        if let Err(e) = self.try_speak(text).await {
            println!("TTS Error: {e}");
            println!(
                "Please ensure a compatible TTS engine (e.g., espeak-ng on Linux) is installed and configured."
            );
            println!("Assistant would say: {text}");
        }
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
