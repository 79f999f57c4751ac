//! Configuration files driving a whole session.

use crate::helpers::TestRig;
use jarvis::AssistantConfig;
use jarvis::startup::run_session;
use tokio_util::sync::CancellationToken;

const USER_CONFIG: &str = r#"
[assistant]
name = "Friday"
ask_user_name = false

[knowledge]
max_sentences = 2

[[intents.custom]]
name = "weather"
phrases = ["weather"]
response = "{assistant} cannot see outside, but it is probably raining."
"#;

#[tokio::test]
async fn session_uses_configured_name_and_custom_intents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, USER_CONFIG).unwrap();
    let config = AssistantConfig::load(Some(&path)).unwrap();

    let (adapters, probe) = TestRig::new()
        .hears(&["what's the weather like", "what is your name", "exit"])
        .at(20, 0)
        .build();
    let state = run_session(&config, adapters, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(state.assistant_name, "Friday");
    assert_eq!(state.user_name, None);
    assert_eq!(
        probe.transcript.spoken(),
        vec![
            "Good Evening Sir!",
            "I am your Assistant",
            "Friday",
            "How can I Help you, Sir",
            "Friday cannot see outside, but it is probably raining.",
            "My name is Friday.",
            "Thanks for your time. Goodbye Sir!",
        ]
    );
}

#[tokio::test]
async fn invalid_custom_intent_fails_before_greeting() {
    let mut config = AssistantConfig::default();
    config.intents.custom.push(jarvis::config::CustomIntentConfig {
        phrases: vec!["  ".into()],
        response: Some("never".into()),
        ..Default::default()
    });

    let (adapters, probe) = TestRig::new().build();
    let result = run_session(&config, adapters, CancellationToken::new()).await;

    assert!(matches!(result, Err(jarvis::AssistantError::Config(_))));
    assert!(probe.transcript.all().is_empty());
}

#[tokio::test]
async fn configured_sentence_count_reaches_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, USER_CONFIG).unwrap();
    let config = AssistantConfig::load(Some(&path)).unwrap();

    let (adapters, probe) = TestRig::new()
        .hears(&["wikipedia rust", "goodbye"])
        .answer("rust", crate::helpers::Answer::Summary("Rust is a language."))
        .build();
    run_session(&config, adapters, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        probe.knowledge_calls.lock().unwrap().as_slice(),
        &[("rust".to_owned(), 2)]
    );
}
