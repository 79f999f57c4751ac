//! Built-in intents, in priority order.
//!
//! | # | Intent | Triggers |
//! |---|--------|----------|
//! | 1 | exit | "exit", "quit", "goodbye" |
//! | 2 | wikipedia | "wikipedia" |
//! | 3 | open youtube | "open youtube" |
//! | 4 | open google | "open google" |
//! | 5 | open stack overflow | "open stackoverflow", "open stack overflow" |
//! | 6 | time | "what's the time", "what`s the time", "what is the time" |
//! | 7 | how are you | "how are you" |
//! | 8 | fine | "fine", "good", "i am good", "i am fine" |
//! | 9 | rename | "change my name to" |
//! | 10 | ask name | "what's your name", "what is your name" |
//! | 11 | who made you | "who made you", "who created you" |
//! | 12 | joke | "joke", "tell me a joke" |
//! | 13 | who am i | "who i am" |
//! | 14 | why created | "why you came to this world", "why were you created" |
//! | 15 | what is love | "what is love" |
//! | 16 | who are you | "who are you" |
//! | 17 | purpose | "what is the reason for you to be here", "your purpose" |
//! | 18 | lock screen | "lock window", "lock device", "lock screen" |
//!
//! Exit comes first: "goodbye" contains "good", and every utterance naming an
//! exit word must end the session.

use super::{IntentRule, Trigger};
use crate::actions::{Action, responses};

fn phrases(list: &[&str]) -> Vec<Trigger> {
    list.iter().map(|p| Trigger::phrase(p)).collect()
}

fn rule(name: &str, triggers: &[&str], action: Action) -> IntentRule {
    IntentRule {
        name: name.to_owned(),
        triggers: phrases(triggers),
        action,
    }
}

fn open(url: &str, announcement: &str) -> Action {
    Action::OpenUrl {
        url: url.to_owned(),
        announcement: Some(announcement.to_owned()),
    }
}

fn reply(text: &str) -> Action {
    Action::Reply(text.to_owned())
}

/// The built-in rule list.
pub fn builtin() -> Vec<IntentRule> {
    vec![
        rule("exit", &["exit", "quit", "goodbye"], Action::Exit),
        rule("wikipedia", &["wikipedia"], Action::Wikipedia),
        rule(
            "open youtube",
            &["open youtube"],
            open("https://www.youtube.com", responses::OPEN_YOUTUBE),
        ),
        rule(
            "open google",
            &["open google"],
            open("https://www.google.com", responses::OPEN_GOOGLE),
        ),
        rule(
            "open stack overflow",
            &["open stackoverflow", "open stack overflow"],
            open("https://stackoverflow.com", responses::OPEN_STACK_OVERFLOW),
        ),
        rule(
            "time",
            &["what's the time", "what`s the time", "what is the time"],
            Action::TellTime,
        ),
        rule("how are you", &["how are you"], reply(responses::HOW_ARE_YOU)),
        rule(
            "fine",
            &["fine", "good", "i am good", "i am fine"],
            reply(responses::FINE),
        ),
        rule("rename", &["change my name to"], Action::Rename),
        rule(
            "ask name",
            &["what's your name", "what is your name"],
            Action::TellName,
        ),
        rule(
            "who made you",
            &["who made you", "who created you"],
            reply(responses::WHO_MADE_YOU),
        ),
        rule("joke", &["joke", "tell me a joke"], Action::Joke),
        rule("who am i", &["who i am"], reply(responses::WHO_AM_I)),
        rule(
            "why created",
            &["why you came to this world", "why were you created"],
            reply(responses::WHY_CREATED),
        ),
        rule("what is love", &["what is love"], reply(responses::WHAT_IS_LOVE)),
        rule("who are you", &["who are you"], reply(responses::WHO_ARE_YOU)),
        rule(
            "purpose",
            &["what is the reason for you to be here", "your purpose"],
            reply(responses::PURPOSE),
        ),
        rule(
            "lock screen",
            &["lock window", "lock device", "lock screen"],
            Action::LockScreen,
        ),
    ]
}
