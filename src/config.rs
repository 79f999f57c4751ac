//! Configuration types for the assistant.

use crate::error::{AssistantError, Result};
use jarvis_knowledge::KnowledgeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration for the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Identity and start-up behaviour.
    pub assistant: AssistantSection,
    /// How and for how long the assistant listens.
    pub listen: ListenConfig,
    /// Audio capture settings.
    pub audio: AudioConfig,
    /// Voice activity detection settings.
    pub vad: VadConfig,
    /// Speech-to-text settings.
    pub stt: SttConfig,
    /// Model management settings.
    pub models: ModelConfig,
    /// Text-to-speech settings.
    pub tts: TtsConfig,
    /// Encyclopedia lookup settings.
    pub knowledge: KnowledgeSection,
    /// User-defined intents.
    pub intents: IntentsConfig,
}

/// Assistant identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    /// Name the assistant introduces itself with. Can be changed by voice.
    pub name: String,
    /// Ask for the user's name during the greeting.
    pub ask_user_name: bool,
    /// Clear the terminal before greeting.
    pub clear_screen_on_start: bool,
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            name: "Jarvis 2 point o".to_owned(),
            ask_user_name: true,
            clear_screen_on_start: false,
        }
    }
}

/// Where utterances come from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenBackend {
    /// Microphone capture + Parakeet transcription.
    #[default]
    Microphone,
    /// Typed lines on stdin.
    Console,
}

/// Listening limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Input backend.
    pub backend: ListenBackend,
    /// Seconds to wait for speech to start before giving up.
    pub timeout_secs: u64,
    /// Maximum length of one phrase in seconds.
    pub phrase_limit_secs: u64,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            backend: ListenBackend::Microphone,
            timeout_secs: 5,
            phrase_limit_secs: 5,
        }
    }
}

impl ListenConfig {
    /// Limits passed to every `listen` call.
    pub fn limits(&self) -> crate::stt::ListenLimits {
        crate::stt::ListenLimits {
            timeout: Duration::from_secs(self.timeout_secs),
            phrase_limit: Duration::from_secs(self.phrase_limit_secs),
        }
    }
}

/// Audio capture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate delivered to the VAD and STT, in Hz.
    pub input_sample_rate: u32,
    /// Input device name (None = system default).
    pub input_device: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            input_sample_rate: 16_000,
            input_device: None,
        }
    }
}

/// Voice activity detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VadConfig {
    /// Minimum RMS energy treated as speech.
    ///
    /// Ambient calibration may raise the effective threshold for a listen,
    /// never lower it. Typical values for f32 samples in \[-1, 1\]:
    ///   - 0.005: very sensitive
    ///   - 0.01:  normal sensitivity (default)
    ///   - 0.02:  noisy environments
    pub threshold: f32,
    /// Silence in ms that ends a phrase.
    pub min_silence_duration_ms: u32,
    /// Speech shorter than this (ms) is discarded as noise.
    pub min_speech_duration_ms: u32,
    /// Ambient noise sampled before each listen, in ms. 0 disables calibration.
    pub ambient_calibration_ms: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            min_silence_duration_ms: 1000,
            min_speech_duration_ms: 250,
            ambient_calibration_ms: 1000,
        }
    }
}

/// Speech-to-text configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SttConfig {
    /// HuggingFace model ID for the STT model.
    pub model_id: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            // ONNX export; the upstream NVIDIA repo only ships .nemo.
            model_id: "istupakov/parakeet-tdt-0.6b-v3-onnx".to_owned(),
        }
    }
}

/// Model cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory for caching downloaded models.
    pub cache_dir: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            cache_dir: crate::app_dirs::hf_cache_dir(),
        }
    }
}

/// Where spoken responses go.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsBackend {
    /// A system speech program.
    #[default]
    System,
    /// Print responses only.
    Console,
}

/// Which system speech program to drive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TtsEngine {
    /// First available program for this platform.
    #[default]
    Auto,
    /// `espeak-ng`.
    EspeakNg,
    /// `espeak`.
    Espeak,
    /// macOS `say`.
    Say,
    /// speech-dispatcher `spd-say`.
    SpdSay,
    /// Windows SAPI through PowerShell.
    Sapi,
}

/// Text-to-speech configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// Output backend.
    pub backend: TtsBackend,
    /// Speech program selection.
    pub engine: TtsEngine,
    /// Language tag (`en`, `en-GB`) or engine voice name (`Daniel`).
    pub voice: String,
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Upper bound on a single utterance's playback, in seconds.
    pub max_utterance_secs: u64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            backend: TtsBackend::System,
            engine: TtsEngine::Auto,
            voice: "en".to_owned(),
            rate: 175,
            max_utterance_secs: 60,
        }
    }
}

/// Encyclopedia lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeSection {
    /// MediaWiki action API endpoint.
    pub api_url: String,
    /// Sentences read out from a summary.
    pub max_sentences: usize,
    /// Options read out for an ambiguous topic.
    pub max_options: usize,
    /// Overall bound on one lookup, in seconds.
    pub timeout_secs: u64,
    /// Summary cache lifetime in seconds. 0 disables the cache.
    pub cache_ttl_secs: u64,
    /// Custom User-Agent.
    pub user_agent: Option<String>,
}

impl Default for KnowledgeSection {
    fn default() -> Self {
        Self {
            api_url: jarvis_knowledge::config::DEFAULT_API_URL.to_owned(),
            max_sentences: 3,
            max_options: 3,
            timeout_secs: 10,
            cache_ttl_secs: 600,
            user_agent: None,
        }
    }
}

impl KnowledgeSection {
    /// Settings for the knowledge crate's HTTP source.
    pub fn to_knowledge_config(&self) -> KnowledgeConfig {
        KnowledgeConfig {
            api_url: self.api_url.clone(),
            timeout_seconds: self.timeout_secs,
            cache_ttl_seconds: self.cache_ttl_secs,
            max_options: self.max_options,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Overall lookup timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// User-defined intents, matched after the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentsConfig {
    /// Custom intents in priority order.
    pub custom: Vec<CustomIntentConfig>,
}

/// One user-defined intent.
///
/// ```toml
/// [[intents.custom]]
/// phrases = ["open", "github"]
/// response = "Opening GitHub."
/// url = "https://github.com"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomIntentConfig {
    /// Optional label used in logs.
    pub name: Option<String>,
    /// All of these phrases must appear in the utterance.
    pub phrases: Vec<String>,
    /// Spoken reply. `{assistant}` is replaced with the assistant's name.
    pub response: Option<String>,
    /// URL opened in the browser.
    pub url: Option<String>,
}

impl CustomIntentConfig {
    /// Check that the intent can match something and does something.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let label = self.label();
        if self.phrases.is_empty() || self.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(AssistantError::Config(format!(
                "custom intent '{label}' needs at least one non-empty phrase"
            )));
        }
        let has_response = self.response.as_deref().is_some_and(|r| !r.trim().is_empty());
        if !has_response && self.url.is_none() {
            return Err(AssistantError::Config(format!(
                "custom intent '{label}' needs a response or a url"
            )));
        }
        if let Some(url) = &self.url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(AssistantError::Config(format!(
                "custom intent '{label}' url must be http(s), got '{url}'"
            )));
        }
        Ok(())
    }

    /// Name for logs: the configured name or the joined phrases.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("custom:{}", self.phrases.join("+")))
    }
}

impl AssistantConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AssistantError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AssistantError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config_dir>/jarvis/config.toml`.
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_file()
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed, or if
    /// the loaded configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the assistant cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.assistant.name.trim().is_empty() {
            return Err(AssistantError::Config("assistant.name must not be empty".into()));
        }
        if self.listen.timeout_secs == 0 {
            return Err(AssistantError::Config(
                "listen.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.listen.phrase_limit_secs == 0 {
            return Err(AssistantError::Config(
                "listen.phrase_limit_secs must be greater than 0".into(),
            ));
        }
        if self.audio.input_sample_rate == 0 {
            return Err(AssistantError::Config(
                "audio.input_sample_rate must be greater than 0".into(),
            ));
        }
        if self.knowledge.max_sentences == 0 {
            return Err(AssistantError::Config(
                "knowledge.max_sentences must be greater than 0".into(),
            ));
        }
        if self.tts.max_utterance_secs == 0 {
            return Err(AssistantError::Config(
                "tts.max_utterance_secs must be greater than 0".into(),
            ));
        }
        self.knowledge
            .to_knowledge_config()
            .validate()
            .map_err(|e| AssistantError::Config(format!("knowledge: {e}")))?;
        for intent in &self.intents.custom {
            intent.validate()?;
        }
        Ok(())
    }
}
