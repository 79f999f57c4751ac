//! Speech-to-text using NVIDIA Parakeet TDT.
//!
//! Uses `parakeet-rs` with the `ParakeetTDT` model for batch transcription
//! with punctuation.

use crate::audio::SpeechSegment;
use crate::config::{ModelConfig, SttConfig};
use crate::error::{AssistantError, Result};
use crate::models::ModelManager;
use parakeet_rs::{ParakeetTDT, TimestampMode, Transcriber};
use std::time::Instant;
use tracing::{debug, info};

const ENCODER_ONNX: &str = "encoder-model.onnx";
const ENCODER_DATA: &str = "encoder-model.onnx.data";
const DECODER_ONNX: &str = "decoder_joint-model.onnx";
const VOCAB_TXT: &str = "vocab.txt";

/// Model files required by Parakeet TDT.
pub const STT_MODEL_FILES: [&str; 4] = [ENCODER_ONNX, ENCODER_DATA, DECODER_ONNX, VOCAB_TXT];

/// Speech-to-text engine using Parakeet TDT.
pub struct ParakeetStt {
    model: Option<ParakeetTDT>,
    model_id: String,
    model_manager: ModelManager,
}

impl ParakeetStt {
    /// Create a new STT engine instance.
    ///
    /// The model is loaded lazily on first use, or eagerly via
    /// [`ensure_loaded`](Self::ensure_loaded).
    ///
    /// # Errors
    ///
    /// Returns an error if the model cache directory cannot be created.
    pub fn new(config: &SttConfig, model_config: &ModelConfig) -> Result<Self> {
        let model_manager = ModelManager::new(model_config)?;
        info!("STT configured with model: {}", config.model_id);

        Ok(Self {
            model: None,
            model_id: config.model_id.clone(),
            model_manager,
        })
    }

    /// Transcribe a speech segment to text.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or transcription fails.
    pub fn transcribe(&mut self, segment: &SpeechSegment) -> Result<String> {
        self.ensure_loaded()?;

        let started = Instant::now();
        debug!("transcribing {:.1}s audio segment", segment.duration_secs());

        let model = self
            .model
            .as_mut()
            .ok_or_else(|| AssistantError::Stt("model not initialized".into()))?;

        let result = model
            .transcribe_samples(
                segment.samples.clone(),
                segment.sample_rate,
                1, // mono
                Some(TimestampMode::Sentences),
            )
            .map_err(|e| AssistantError::Stt(format!("transcription failed: {e}")))?;

        debug!("transcribed in {:.0}ms", started.elapsed().as_millis());
        Ok(result.text)
    }

    /// Load the model now so the first listen does not pay for it.
    ///
    /// # Errors
    ///
    /// Returns an error if model download or loading fails.
    pub fn ensure_loaded(&mut self) -> Result<()> {
        if self.model.is_none() {
            self.initialize()?;
        }
        Ok(())
    }

    /// Load the Parakeet TDT model from cache (downloading if needed).
    fn initialize(&mut self) -> Result<()> {
        info!("loading STT model: {}", self.model_id);

        let mut repo_dir = None;
        for filename in STT_MODEL_FILES {
            let path = self.model_manager.get_model_path(&self.model_id, filename)?;
            repo_dir = path.parent().map(std::path::Path::to_path_buf);
        }
        // All files land in the same snapshot directory.
        let repo_dir = repo_dir.ok_or_else(|| {
            AssistantError::Model(format!("no snapshot directory for {}", self.model_id))
        })?;

        let model = ParakeetTDT::from_pretrained(&repo_dir, None)
            .map_err(|e| AssistantError::Stt(format!("failed to load Parakeet TDT: {e}")))?;

        info!("STT model loaded");
        self.model = Some(model);
        Ok(())
    }
}
