//! "wikipedia <topic>" requests against a mocked knowledge source.

use crate::helpers::{Answer, Said, TestRig};
use jarvis::actions::{Flow, responses};
use jarvis::{Adapters, DispatchSettings, Dispatcher, IntentTable, SessionState};
use std::time::Duration;

const EINSTEIN: &str = "Albert Einstein was a German-born theoretical physicist. \
He developed the theory of relativity. He received the 1921 Nobel Prize in Physics.";

fn dispatcher(adapters: Adapters) -> Dispatcher {
    Dispatcher::new(
        IntentTable::builtin(),
        adapters,
        DispatchSettings {
            knowledge_timeout: Duration::from_millis(200),
            ..DispatchSettings::default()
        },
    )
}

fn state() -> SessionState {
    SessionState::new("Jarvis 2 point o")
}

#[tokio::test]
async fn summary_is_announced_shown_and_spoken() {
    let (adapters, probe) = TestRig::new()
        .hears(&["Wikipedia Albert Einstein"])
        .answer("albert einstein", Answer::Summary(EINSTEIN))
        .build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(
        probe.transcript.all(),
        vec![
            Said::Shown(responses::WIKI_SEARCHING.into()),
            Said::Spoken(responses::WIKI_ACCORDING.into()),
            Said::Shown(EINSTEIN.into()),
            Said::Spoken(EINSTEIN.into()),
        ]
    );
    assert_eq!(
        probe.knowledge_calls.lock().unwrap().as_slice(),
        &[("albert einstein".to_owned(), 3)]
    );
}

#[tokio::test]
async fn punctuated_request_looks_up_the_bare_topic() {
    let (adapters, probe) = TestRig::new()
        .hears(&["Wikipedia, Albert Einstein?"])
        .answer("albert einstein", Answer::Summary(EINSTEIN))
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.knowledge_calls.lock().unwrap().as_slice(),
        &[("albert einstein".to_owned(), 3)]
    );
    assert_eq!(probe.transcript.spoken(), vec![responses::WIKI_ACCORDING, EINSTEIN]);
}

#[tokio::test]
async fn not_found_names_the_topic_without_punctuation() {
    let (adapters, probe) = TestRig::new()
        .hears(&["Wikipedia qwzxv."])
        .answer("qwzxv", Answer::NotFound)
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec!["Sorry, I could not find a Wikipedia page for qwzxv."]
    );
}

#[tokio::test]
async fn unintelligible_topic_answer_apologises_then_skips_lookup() {
    let (adapters, probe) = TestRig::new().hears(&["wikipedia"]).mumbles().build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec![
            responses::WIKI_ASK_TOPIC,
            responses::UNINTELLIGIBLE,
            responses::WIKI_NO_TOPIC,
        ]
    );
    assert_eq!(probe.knowledge_call_count(), 0);
}

#[tokio::test]
async fn missing_topic_is_asked_for() {
    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia", "Rust"])
        .answer("rust", Answer::Summary("Rust is a programming language."))
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec![
            responses::WIKI_ASK_TOPIC,
            responses::WIKI_ACCORDING,
            "Rust is a programming language.",
        ]
    );
    assert_eq!(probe.knowledge_call_count(), 1);
}

#[tokio::test]
async fn silence_after_the_question_skips_the_lookup() {
    let (adapters, probe) = TestRig::new().hears(&["wikipedia", ""]).build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(
        probe.transcript.spoken(),
        vec![responses::WIKI_ASK_TOPIC, responses::WIKI_NO_TOPIC]
    );
    assert_eq!(
        probe
            .transcript
            .spoken()
            .iter()
            .filter(|s| *s == responses::WIKI_NO_TOPIC)
            .count(),
        1
    );
    assert_eq!(probe.knowledge_call_count(), 0);
}

#[tokio::test]
async fn ambiguous_topic_reads_at_most_three_options() {
    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia mercury"])
        .answer(
            "mercury",
            Answer::Ambiguous(vec![
                "Mercury (planet)",
                "Mercury (element)",
                "Mercury (mythology)",
                "Freddie Mercury",
            ]),
        )
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Your query 'mercury' led to multiple results like Mercury (planet), \
             Mercury (element), Mercury (mythology). Please be more specific."
        ]
    );
}

#[tokio::test]
async fn unknown_topic_is_reported() {
    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia qwzxv"])
        .answer("qwzxv", Answer::NotFound)
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec!["Sorry, I could not find a Wikipedia page for qwzxv."]
    );
}

#[tokio::test]
async fn service_failure_apologises_and_continues() {
    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia rust", "how are you"])
        .answer("rust", Answer::HttpFailure)
        .build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;
    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(outcome.state, state());
    d.turn(outcome.state).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Sorry, an error occurred while searching Wikipedia.",
            responses::HOW_ARE_YOU,
        ]
    );
}

#[tokio::test]
async fn slow_lookup_times_out_with_an_apology() {
    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia black holes"])
        .answer("black holes", Answer::Hang)
        .build();
    let mut d = dispatcher(adapters);

    let outcome = tokio::time::timeout(Duration::from_secs(5), d.turn(state()))
        .await
        .expect("lookup should be bounded");

    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(
        probe.transcript.spoken(),
        vec!["Sorry, an error occurred while searching Wikipedia."]
    );
    assert_eq!(probe.knowledge_call_count(), 1);
}
