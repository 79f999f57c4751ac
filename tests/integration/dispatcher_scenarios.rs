//! End-to-end command dispatch through the built-in intent table.

use crate::helpers::{Said, TestRig};
use jarvis::actions::{Flow, jokes, responses};
use jarvis::config::CustomIntentConfig;
use jarvis::{Adapters, DispatchSettings, Dispatcher, IntentTable, SessionState, Utterance};
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn dispatcher(adapters: Adapters) -> Dispatcher {
    Dispatcher::new(IntentTable::builtin(), adapters, DispatchSettings::default())
}

fn state() -> SessionState {
    SessionState::new("Jarvis 2 point o")
}

#[tokio::test]
async fn exit_speaks_one_farewell_and_terminates() {
    let (adapters, probe) = TestRig::new().hears(&["Goodbye"]).build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.flow, Flow::Terminate);
    assert_eq!(probe.transcript.spoken(), vec![responses::FAREWELL]);
}

#[tokio::test]
async fn run_stops_after_exit() {
    let (adapters, probe) = TestRig::new()
        .hears(&["how are you", "", "quit"])
        .build();
    let mut d = dispatcher(adapters);

    let final_state = d.run(state(), CancellationToken::new()).await;

    assert_eq!(final_state, state());
    assert_eq!(
        probe.transcript.spoken(),
        vec![responses::HOW_ARE_YOU, responses::FAREWELL]
    );
    assert_eq!(probe.listens.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn run_returns_when_cancelled() {
    let (adapters, probe) = TestRig::new().hears(&["how are you"]).build();
    let mut d = dispatcher(adapters);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let final_state = d.run(state(), cancel).await;

    assert_eq!(final_state, state());
    assert!(probe.transcript.all().is_empty());
}

#[tokio::test]
async fn sentinel_produces_no_output() {
    let (adapters, probe) = TestRig::new().hears(&[""]).build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(outcome.state, state());
    assert!(probe.transcript.all().is_empty());
}

#[tokio::test]
async fn unmatched_input_is_silent() {
    let (adapters, probe) = TestRig::new()
        .hears(&["hmm", "open the pod bay doors"])
        .build();
    let mut d = dispatcher(adapters);

    let s = d.turn(state()).await.state;
    let s = d.turn(s).await.state;

    assert_eq!(s, state());
    assert!(probe.transcript.all().is_empty());
}

#[tokio::test]
async fn time_is_reported_in_twelve_hour_format() {
    let (adapters, probe) = TestRig::new()
        .hears(&["What's the time"])
        .at(14, 5)
        .build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(probe.transcript.spoken(), vec!["Sir, the time is 02:05 PM"]);
}

#[tokio::test]
async fn sequential_renames_keep_the_last_name() {
    let (adapters, probe) = TestRig::new()
        .hears(&[
            "change my name to friday",
            "change my name to karen",
            "what is your name",
        ])
        .build();
    let mut d = dispatcher(adapters);

    let s = d.turn(state()).await.state;
    assert_eq!(s.assistant_name, "friday");
    let s = d.turn(s).await.state;
    assert_eq!(s.assistant_name, "karen");
    let s = d.turn(s).await.state;

    assert_eq!(s.assistant_name, "karen");
    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Okay, you can call me friday from now on.",
            "Okay, you can call me karen from now on.",
            "My name is karen.",
        ]
    );
}

#[tokio::test]
async fn rename_without_a_name_asks_for_one() {
    let (adapters, probe) = TestRig::new().hears(&["Change my name to"]).build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.state, state());
    assert_eq!(probe.transcript.spoken(), vec![responses::RENAME_MISSING]);
}

#[tokio::test]
async fn rename_keeps_only_the_words_after_the_phrase() {
    let (adapters, probe) = TestRig::new()
        .hears(&["please change my name to friday"])
        .build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.state.assistant_name, "friday");
    assert_eq!(
        probe.transcript.spoken(),
        vec!["Okay, you can call me friday from now on."]
    );
}

#[tokio::test]
async fn punctuated_rename_stores_a_clean_name() {
    let (adapters, probe) = TestRig::new()
        .hears(&["Change my name to Friday.", "Who are you?", "What is your name?"])
        .build();
    let mut d = dispatcher(adapters);

    let s = d.turn(state()).await.state;
    let s = d.turn(s).await.state;
    let s = d.turn(s).await.state;

    assert_eq!(s.assistant_name, "friday");
    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Okay, you can call me friday from now on.",
            "I am friday, your virtual assistant, inspired by a project from Group Number 49.",
            "My name is friday.",
        ]
    );
}

#[tokio::test]
async fn rename_to_punctuation_only_asks_for_a_name() {
    let (adapters, probe) = TestRig::new().hears(&["change my name to ..."]).build();
    let mut d = dispatcher(adapters);

    let outcome = d.turn(state()).await;

    assert_eq!(outcome.state, state());
    assert_eq!(probe.transcript.spoken(), vec![responses::RENAME_MISSING]);
}

#[tokio::test]
async fn unintelligible_speech_gets_one_apology() {
    let (adapters, probe) = TestRig::new().mumbles().hears(&["quit"]).build();
    let mut d = dispatcher(adapters);

    let final_state = d.run(state(), CancellationToken::new()).await;

    assert_eq!(final_state, state());
    assert_eq!(
        probe.transcript.spoken(),
        vec![responses::UNINTELLIGIBLE, responses::FAREWELL]
    );
}

#[tokio::test]
async fn who_are_you_uses_current_name() {
    let (adapters, probe) = TestRig::new()
        .hears(&["change my name to edith", "who are you"])
        .build();
    let mut d = dispatcher(adapters);

    let s = d.turn(state()).await.state;
    d.turn(s).await;

    assert_eq!(
        probe.transcript.spoken()[1],
        "I am edith, your virtual assistant, inspired by a project from Group Number 49."
    );
}

#[tokio::test]
async fn open_sites_announce_then_navigate() {
    let (adapters, probe) = TestRig::new()
        .hears(&["open youtube", "please open google", "open stack overflow"])
        .build();
    let mut d = dispatcher(adapters);

    let mut s = state();
    for _ in 0..3 {
        s = d.turn(s).await.state;
    }

    assert_eq!(
        probe.opened(),
        vec![
            "https://www.youtube.com",
            "https://www.google.com",
            "https://stackoverflow.com",
        ]
    );
    assert_eq!(
        probe.transcript.spoken(),
        vec![
            responses::OPEN_YOUTUBE,
            responses::OPEN_GOOGLE,
            responses::OPEN_STACK_OVERFLOW,
        ]
    );
}

#[tokio::test]
async fn goodbye_wins_over_good() {
    let (adapters, probe) = TestRig::new().hears(&["good goodbye"]).build();
    let mut d = dispatcher(adapters);

    assert_eq!(d.turn(state()).await.flow, Flow::Terminate);
    assert_eq!(probe.transcript.spoken(), vec![responses::FAREWELL]);
}

#[tokio::test]
async fn joke_is_shown_then_spoken() {
    let (adapters, probe) = TestRig::new().hears(&["tell me a joke"]).build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    let said = probe.transcript.all();
    assert_eq!(said.len(), 2);
    let (Said::Shown(shown), Said::Spoken(spoken)) = (&said[0], &said[1]) else {
        panic!("expected show then speak, got {said:?}");
    };
    assert_eq!(shown, spoken);
    assert!(jokes::JOKES.contains(&shown.as_str()));
}

#[tokio::test]
async fn lock_screen_explains_and_lists_shortcuts() {
    let (adapters, probe) = TestRig::new().hears(&["lock screen"]).build();
    let mut d = dispatcher(adapters);

    d.turn(state()).await;

    assert_eq!(
        probe.transcript.spoken(),
        vec![responses::LOCK_UNSUPPORTED, responses::LOCK_ADVICE]
    );
    assert_eq!(probe.transcript.shown(), responses::LOCK_HINTS.to_vec());
    assert!(probe.opened().is_empty());
}

#[tokio::test]
async fn canned_replies() {
    let cases = [
        ("how are you", responses::HOW_ARE_YOU),
        ("i am fine", responses::FINE),
        ("who made you", responses::WHO_MADE_YOU),
        ("who i am", responses::WHO_AM_I),
        ("why were you created", responses::WHY_CREATED),
        ("what is love", responses::WHAT_IS_LOVE),
        ("what is your purpose", responses::PURPOSE),
    ];
    for (heard, reply) in cases {
        let (adapters, probe) = TestRig::new().hears(&[heard]).build();
        let mut d = dispatcher(adapters);
        d.turn(state()).await;
        assert_eq!(probe.transcript.spoken(), vec![reply], "heard {heard:?}");
    }
}

#[tokio::test]
async fn custom_intents_follow_builtins() {
    let custom = vec![
        CustomIntentConfig {
            name: Some("docs".into()),
            phrases: vec!["open".into(), "docs".into()],
            response: Some("Opening the docs, {assistant} at your service.".into()),
            url: Some("https://docs.rs".into()),
        },
        CustomIntentConfig {
            phrases: vec!["how are you".into()],
            response: Some("shadowed".into()),
            ..Default::default()
        },
    ];
    let table = IntentTable::with_custom(&custom).unwrap();
    let (adapters, probe) = TestRig::new()
        .hears(&["please open the docs", "how are you"])
        .build();
    let mut d = Dispatcher::new(table, adapters, DispatchSettings::default());

    let s = d.turn(state()).await.state;
    d.turn(s).await;

    assert_eq!(probe.opened(), vec!["https://docs.rs"]);
    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Opening the docs, Jarvis 2 point o at your service.",
            responses::HOW_ARE_YOU,
        ]
    );
}

#[tokio::test]
async fn dispatch_accepts_a_preheard_utterance() {
    let (adapters, probe) = TestRig::new().build();
    let mut d = Dispatcher::new(
        IntentTable::builtin(),
        adapters,
        DispatchSettings {
            knowledge_timeout: Duration::from_secs(1),
            ..DispatchSettings::default()
        },
    );

    let outcome = d
        .dispatch(&Utterance::from_transcript("WHAT IS LOVE"), state())
        .await;

    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(probe.transcript.spoken(), vec![responses::WHAT_IS_LOVE]);
    assert_eq!(probe.listens.load(Ordering::SeqCst), 0);
}
