//! Start-of-session greeting.

use crate::clock::DayPeriod;
use crate::dispatcher::Adapters;
use crate::session::SessionState;
use crate::stt::ListenLimits;
use crate::utterance::trim_punctuation;
use chrono::Timelike;
use tracing::debug;

const BANNER_RULE: &str = "#####################";

/// Options for [`greet`].
#[derive(Debug, Clone, Copy)]
pub struct GreetOptions {
    /// Clear the terminal first.
    pub clear_screen: bool,
    /// Ask for and welcome the user by name.
    pub ask_user_name: bool,
    /// Limits for the name question.
    pub listen: ListenLimits,
}

/// Greeting for an hour of the day. Hours wrap modulo 24.
pub fn greeting_for(hour: u32) -> &'static str {
    match DayPeriod::from_hour(hour) {
        DayPeriod::Morning => "Good Morning Sir!",
        DayPeriod::Afternoon => "Good Afternoon Sir!",
        DayPeriod::Evening => "Good Evening Sir!",
    }
}

/// Welcome banner lines, centred in `width` columns when known.
pub fn welcome_banner(user_name: &str, width: Option<usize>) -> Vec<String> {
    let lines = [BANNER_RULE.to_owned(), format!("Welcome Mr. {user_name}"), BANNER_RULE.to_owned()];
    match width {
        Some(width) => lines.iter().map(|line| center(line, width)).collect(),
        None => lines.to_vec(),
    }
}

/// Centre `text` in `width` columns, extra padding going to the right.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Greet the user and learn their name.
///
/// Speaks the time-of-day greeting and the assistant's name, asks what to
/// call the user and listens once. A heard name is recorded in the returned
/// state and welcomed with a banner; silence skips the welcome.
pub async fn greet(
    adapters: &mut Adapters,
    state: SessionState,
    options: GreetOptions,
) -> SessionState {
    if options.clear_screen {
        adapters.desktop.clear_screen();
    }

    let hour = adapters.clock.now().hour();
    adapters.output.speak(greeting_for(hour)).await;
    adapters.output.speak("I am your Assistant").await;
    adapters.output.speak(&state.assistant_name).await;

    let mut state = state;
    if options.ask_user_name {
        adapters.output.speak("What should I call you sir").await;
        let heard = adapters.listen(options.listen).await;
        match heard.text().map(trim_punctuation).filter(|n| !n.is_empty()) {
            Some(name) => {
                adapters.output.speak("Welcome Mister").await;
                adapters.output.speak(name).await;
                for line in welcome_banner(name, adapters.desktop.terminal_width()) {
                    adapters.output.show(&line);
                }
                state = state.with_user_name(name);
            }
            None => debug!("no user name given"),
        }
    }

    adapters.output.speak("How can I Help you, Sir").await;
    state
}
