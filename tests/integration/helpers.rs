//! Shared adapter doubles for integration tests.
//!
//! Inputs are scripted, outputs and side effects are recorded into shared
//! handles the test keeps after the adapters move into a dispatcher.

use async_trait::async_trait;
use jarvis::clock::FixedClock;
use jarvis::desktop::Desktop;
use jarvis::stt::{ListenLimits, SpeechInput};
use jarvis::tts::SpeechOutput;
use jarvis::{Adapters, Utterance};
use jarvis_knowledge::{KnowledgeError, KnowledgeSource};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Plays back a fixed list of utterances. Panics when the script runs out.
pub(crate) struct ScriptedInput {
    script: VecDeque<Utterance>,
    listens: Arc<AtomicUsize>,
}

#[async_trait]
impl SpeechInput for ScriptedInput {
    async fn listen(&mut self, _limits: ListenLimits) -> Utterance {
        self.listens.fetch_add(1, Ordering::SeqCst);
        match self.script.pop_front() {
            Some(utterance) => utterance,
            None => panic!("input script exhausted"),
        }
    }
}

/// One line of assistant output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Said {
    Spoken(String),
    Shown(String),
}

/// Records everything spoken or shown.
#[derive(Clone, Default)]
pub(crate) struct Transcript(Arc<Mutex<Vec<Said>>>);

impl Transcript {
    pub(crate) fn all(&self) -> Vec<Said> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn spoken(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|s| match s {
                Said::Spoken(text) => Some(text),
                Said::Shown(_) => None,
            })
            .collect()
    }

    pub(crate) fn shown(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|s| match s {
                Said::Shown(text) => Some(text),
                Said::Spoken(_) => None,
            })
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

struct RecordingOutput(Transcript);

#[async_trait]
impl SpeechOutput for RecordingOutput {
    async fn speak(&mut self, text: &str) {
        (self.0).0.lock().unwrap().push(Said::Spoken(text.to_owned()));
    }

    fn show(&mut self, text: &str) {
        (self.0).0.lock().unwrap().push(Said::Shown(text.to_owned()));
    }
}

/// Canned knowledge answers.
#[derive(Clone)]
pub(crate) enum Answer {
    Summary(&'static str),
    Ambiguous(Vec<&'static str>),
    NotFound,
    HttpFailure,
    Hang,
}

/// Knowledge source answering from a table and counting calls.
pub(crate) struct MockKnowledge {
    answers: HashMap<String, Answer>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

#[async_trait]
impl KnowledgeSource for MockKnowledge {
    async fn summarize(&self, topic: &str, max_sentences: usize) -> jarvis_knowledge::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((topic.to_owned(), max_sentences));
        match self.answers.get(topic).cloned().unwrap_or(Answer::NotFound) {
            Answer::Summary(text) => Ok(text.to_owned()),
            Answer::Ambiguous(options) => Err(KnowledgeError::Ambiguous {
                topic: topic.to_owned(),
                options: options.into_iter().map(str::to_owned).collect(),
            }),
            Answer::NotFound => Err(KnowledgeError::NotFound(topic.to_owned())),
            Answer::HttpFailure => Err(KnowledgeError::Http("503 Service Unavailable".into())),
            Answer::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(KnowledgeError::Http("unreachable".into()))
            }
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

/// Records opened URLs and screen clears.
#[derive(Clone, Default)]
pub(crate) struct DesktopLog {
    pub(crate) opened: Arc<Mutex<Vec<String>>>,
    pub(crate) clears: Arc<AtomicUsize>,
}

struct RecordingDesktop {
    log: DesktopLog,
    width: Option<usize>,
}

impl Desktop for RecordingDesktop {
    fn open_url(&mut self, url: &str) {
        self.log.opened.lock().unwrap().push(url.to_owned());
    }

    fn clear_screen(&mut self) {
        self.log.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn terminal_width(&self) -> Option<usize> {
        self.width
    }
}

/// Observation handles for a set of test adapters.
pub(crate) struct Probe {
    pub(crate) transcript: Transcript,
    pub(crate) desktop: DesktopLog,
    pub(crate) knowledge_calls: Arc<Mutex<Vec<(String, usize)>>>,
    pub(crate) listens: Arc<AtomicUsize>,
}

impl Probe {
    pub(crate) fn knowledge_call_count(&self) -> usize {
        self.knowledge_calls.lock().unwrap().len()
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.desktop.opened.lock().unwrap().clone()
    }
}

/// Builder for test adapters.
pub(crate) struct TestRig {
    script: Vec<Utterance>,
    answers: HashMap<String, Answer>,
    hour: u32,
    minute: u32,
    width: Option<usize>,
}

impl TestRig {
    pub(crate) fn new() -> Self {
        Self {
            script: Vec::new(),
            answers: HashMap::new(),
            hour: 9,
            minute: 0,
            width: None,
        }
    }

    /// Queue heard phrases; an empty string stands for the sentinel.
    pub(crate) fn hears(mut self, phrases: &[&str]) -> Self {
        self.script
            .extend(phrases.iter().map(|p| Utterance::from_transcript(p)));
        self
    }

    /// Queue speech that transcribes to nothing.
    pub(crate) fn mumbles(mut self) -> Self {
        self.script.push(Utterance::Unintelligible);
        self
    }

    pub(crate) fn answer(mut self, topic: &str, answer: Answer) -> Self {
        self.answers.insert(topic.to_owned(), answer);
        self
    }

    pub(crate) fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    pub(crate) fn terminal_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub(crate) fn build(self) -> (Adapters, Probe) {
        let transcript = Transcript::default();
        let desktop = DesktopLog::default();
        let knowledge_calls = Arc::new(Mutex::new(Vec::new()));
        let listens = Arc::new(AtomicUsize::new(0));

        let adapters = Adapters {
            input: Box::new(ScriptedInput {
                script: self.script.into(),
                listens: Arc::clone(&listens),
            }),
            output: Box::new(RecordingOutput(transcript.clone())),
            knowledge: Arc::new(MockKnowledge {
                answers: self.answers,
                calls: Arc::clone(&knowledge_calls),
            }),
            desktop: Box::new(RecordingDesktop {
                log: desktop.clone(),
                width: self.width,
            }),
            clock: Box::new(FixedClock::at(self.hour, self.minute)),
        };
        let probe = Probe {
            transcript,
            desktop,
            knowledge_calls,
            listens,
        };
        (adapters, probe)
    }
}
