//! Microphone listening: capture, endpointing, transcription.

use super::{ListenLimits, ParakeetStt, SpeechInput};
use crate::audio::SpeechSegment;
use crate::audio::capture::CpalCapture;
use crate::config::{AssistantConfig, AudioConfig, VadConfig};
use crate::error::{AssistantError, Result};
use crate::utterance::{Utterance, trim_punctuation};
use crate::vad::EnergyVad;
use async_trait::async_trait;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Chunks buffered between the audio callback and the listener.
const CHUNK_QUEUE: usize = 256;

/// Listens on the microphone and transcribes with Parakeet.
///
/// Each listen opens the input stream on a blocking thread, calibrates the
/// VAD against ambient noise, waits for speech, records one phrase and
/// transcribes it. The stream is closed before the listen returns.
pub struct MicrophoneInput {
    audio: AudioConfig,
    vad: VadConfig,
    stt: Arc<Mutex<ParakeetStt>>,
}

impl MicrophoneInput {
    /// Check the input device and load the STT model.
    ///
    /// Blocking: downloads the model on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if no input device is usable or the model cannot load.
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        // Fail at start-up, not on the first listen.
        drop(CpalCapture::new(&config.audio)?);

        let mut stt = ParakeetStt::new(&config.stt, &config.models)?;
        stt.ensure_loaded()?;

        Ok(Self {
            audio: config.audio.clone(),
            vad: config.vad.clone(),
            stt: Arc::new(Mutex::new(stt)),
        })
    }
}

#[async_trait]
impl SpeechInput for MicrophoneInput {
    async fn listen(&mut self, limits: ListenLimits) -> Utterance {
        let audio = self.audio.clone();
        let vad = self.vad.clone();
        let stt = Arc::clone(&self.stt);

        let joined = tokio::task::spawn_blocking(move || listen_blocking(&audio, &vad, &stt, limits))
            .await;

        match joined {
            Ok(Ok(utterance)) => utterance,
            Ok(Err(e)) => {
                warn!("listen failed: {e}");
                Utterance::NoInput
            }
            Err(e) => {
                warn!("listen task panicked: {e}");
                Utterance::NoInput
            }
        }
    }
}

fn listen_blocking(
    audio: &AudioConfig,
    vad_config: &VadConfig,
    stt: &Mutex<ParakeetStt>,
    limits: ListenLimits,
) -> Result<Utterance> {
    let Some(segment) = capture_phrase(audio, vad_config, limits)? else {
        println!("No speech detected within the time limit.");
        return Ok(Utterance::NoInput);
    };

    println!("Recognizing...");
    let text = {
        let mut engine = stt
            .lock()
            .map_err(|_| AssistantError::Stt("STT engine lock poisoned".into()))?;
        engine.transcribe(&segment)?
    };

    let text = text.trim();
    if trim_punctuation(text).is_empty() {
        info!("could not understand the audio");
        return Ok(Utterance::Unintelligible);
    }
    println!("User said: {text}");
    Ok(Utterance::from_transcript(text))
}

/// Record one phrase, or `None` if no speech starts within the timeout.
fn capture_phrase(
    audio: &AudioConfig,
    vad_config: &VadConfig,
    limits: ListenLimits,
) -> Result<Option<SpeechSegment>> {
    let capture = CpalCapture::new(audio)?;
    let (tx, rx) = mpsc::sync_channel(CHUNK_QUEUE);
    let stream = capture.start(tx)?;
    let mut vad = EnergyVad::new(vad_config, capture.sample_rate());

    let calibration = Duration::from_millis(u64::from(vad_config.ambient_calibration_ms));
    if !calibration.is_zero() {
        let deadline = Instant::now() + calibration;
        let mut ambient = Vec::new();
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match rx.recv_timeout(remaining) {
                Ok(chunk) => ambient.extend_from_slice(&chunk.samples),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(AssistantError::Audio("input stream closed".into()));
                }
            }
        }
        vad.calibrate(&ambient);
    }

    println!("Listening...");
    let listen_start = Instant::now();
    let mut phrase_start: Option<Instant> = None;

    let segment = loop {
        let deadline = match phrase_start {
            Some(start) => start + limits.phrase_limit,
            None => listen_start + limits.timeout,
        };
        let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
            if phrase_start.is_some() {
                debug!("phrase limit reached");
            }
            break vad.flush();
        };

        match rx.recv_timeout(remaining) {
            Ok(chunk) => {
                if let Some(segment) = vad.process_chunk(&chunk) {
                    break Some(segment);
                }
                phrase_start = match (vad.in_speech(), phrase_start) {
                    (true, None) => Some(chunk.captured_at),
                    (true, started) => started,
                    // A discarded blip: back to waiting for speech.
                    (false, _) => None,
                };
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                return Err(AssistantError::Audio("input stream closed".into()));
            }
        }
    };

    drop(stream);
    Ok(segment)
}
