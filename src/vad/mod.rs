//! Voice activity detection using RMS energy.
//!
//! The detector is calibrated against ambient noise before each listen and
//! then segments the stream into phrases: speech starts when a chunk's energy
//! crosses the threshold and ends after a configured stretch of silence.

use crate::audio::{AudioChunk, SpeechSegment};
use crate::config::VadConfig;
use std::time::Instant;
use tracing::debug;

/// Multiplier applied to the ambient noise level during calibration.
const AMBIENT_RATIO: f32 = 1.5;

/// Energy-threshold voice activity detector.
pub struct EnergyVad {
    /// Samples accumulated for the current phrase.
    speech_buffer: Vec<f32>,
    /// Whether a phrase is in progress.
    in_speech: bool,
    /// Trailing silence inside the current phrase, in samples.
    silence_samples: usize,
    /// Trailing silence that ends a phrase, in samples.
    silence_limit: usize,
    /// When the current phrase started.
    speech_start: Option<Instant>,
    sample_rate: u32,
    /// Configured floor for the threshold.
    base_threshold: f32,
    /// Threshold in effect after calibration.
    threshold: f32,
    /// Phrases shorter than this are discarded.
    min_speech_samples: usize,
}

impl EnergyVad {
    /// Create a detector for audio at `sample_rate`.
    pub fn new(config: &VadConfig, sample_rate: u32) -> Self {
        let per_ms = |ms: u32| (ms as usize * sample_rate as usize) / 1000;
        Self {
            speech_buffer: Vec::new(),
            in_speech: false,
            silence_samples: 0,
            silence_limit: per_ms(config.min_silence_duration_ms).max(1),
            speech_start: None,
            sample_rate,
            base_threshold: config.threshold,
            threshold: config.threshold,
            min_speech_samples: per_ms(config.min_speech_duration_ms),
        }
    }

    /// Raise the threshold above the ambient noise level in `ambient`.
    ///
    /// The threshold never drops below the configured value.
    pub fn calibrate(&mut self, ambient: &[f32]) {
        let noise = compute_rms_energy(ambient);
        self.threshold = self.base_threshold.max(noise * AMBIENT_RATIO);
        debug!(
            "VAD calibrated: ambient_rms={noise:.5}, threshold={:.5}",
            self.threshold
        );
    }

    /// Threshold currently in effect.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a phrase is in progress.
    pub fn in_speech(&self) -> bool {
        self.in_speech
    }

    /// Feed one chunk. Returns a segment once a phrase ends in silence.
    pub fn process_chunk(&mut self, chunk: &AudioChunk) -> Option<SpeechSegment> {
        let is_speech = compute_rms_energy(&chunk.samples) > self.threshold;

        if is_speech {
            if !self.in_speech {
                self.in_speech = true;
                self.speech_start = Some(chunk.captured_at);
                self.speech_buffer.clear();
            }
            self.silence_samples = 0;
            self.speech_buffer.extend_from_slice(&chunk.samples);
        } else if self.in_speech {
            self.silence_samples += chunk.samples.len();
            self.speech_buffer.extend_from_slice(&chunk.samples);

            if self.silence_samples >= self.silence_limit {
                return self.finish();
            }
        }

        None
    }

    /// End the current phrase now, e.g. when the phrase time limit is hit.
    pub fn flush(&mut self) -> Option<SpeechSegment> {
        if !self.in_speech {
            return None;
        }
        self.finish()
    }

    fn finish(&mut self) -> Option<SpeechSegment> {
        let samples = std::mem::take(&mut self.speech_buffer);
        let voiced = samples.len().saturating_sub(self.silence_samples);
        self.in_speech = false;
        self.silence_samples = 0;
        let started_at = self.speech_start.take().unwrap_or_else(Instant::now);

        if voiced < self.min_speech_samples {
            debug!("discarding {voiced} voiced samples as noise");
            return None;
        }
        Some(SpeechSegment {
            samples,
            sample_rate: self.sample_rate,
            started_at,
        })
    }
}

/// Compute RMS energy of audio samples.
pub fn compute_rms_energy(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}
