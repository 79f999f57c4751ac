//! Fixed phrases the assistant speaks or prints.
//!
//! `{assistant}` is replaced with the current assistant name.

pub const FAREWELL: &str = "Thanks for your time. Goodbye Sir!";

pub const OPEN_YOUTUBE: &str = "Opening Youtube in your web browser.";
pub const OPEN_GOOGLE: &str = "Opening Google in your web browser.";
pub const OPEN_STACK_OVERFLOW: &str = "Opening Stack Overflow. Happy coding!";

pub const HOW_ARE_YOU: &str = "I am functioning optimally, Thank you for asking.";
pub const FINE: &str = "It's good to know that you are fine.";
pub const WHO_MADE_YOU: &str = "I am a virtual assistant, a result of programming and algorithms. \
I was conceptually developed based on a project by Group Number 49, under the guidance of \
Professor Gauraw Jumnake sir.";
pub const WHO_AM_I: &str = "If you are talking, you are most likely a human.";
pub const WHY_CREATED: &str = "I was created to assist with tasks and provide information. \
My development was inspired by a project from Group Number 49.";
pub const WHAT_IS_LOVE: &str = "Love is a complex set of emotions, behaviors, and beliefs \
associated with strong feelings of affection, protectiveness, warmth, and respect for another \
person. It can also be a feeling of deep affection for or pleasure in something.";
pub const WHO_ARE_YOU: &str =
    "I am {assistant}, your virtual assistant, inspired by a project from Group Number 49.";
pub const PURPOSE: &str = "My purpose is to assist you with tasks, answer questions, and make \
your interaction with technology smoother. I was inspired by a Minor project by Group Number 49.";

pub const UNINTELLIGIBLE: &str = "I am sorry, I could not understand what you said.";

pub const RENAME_MISSING: &str = "Please specify a name.";

pub const LOCK_UNSUPPORTED: &str = "Locking the device is an operating system specific function.";
pub const LOCK_ADVICE: &str = "I cannot perform this action in a generic way. \
You may need to use your system's shortcut to lock the screen.";
pub const LOCK_HINTS: [&str; 4] = [
    "INFO: Screen lock is OS-specific. Common shortcuts:",
    "- Windows: Win + L",
    "- macOS: Control + Command + Q",
    "- Linux (varies): Often Ctrl + Alt + L",
];

pub const WIKI_SEARCHING: &str = "Searching Wikipedia...";
pub const WIKI_ASK_TOPIC: &str = "What would you like to search on Wikipedia?";
pub const WIKI_NO_TOPIC: &str = "No search term provided for Wikipedia.";
pub const WIKI_ACCORDING: &str = "According to Wikipedia";

/// Substitute the assistant's name into a canned reply.
pub fn personalize(template: &str, assistant_name: &str) -> String {
    template.replace("{assistant}", assistant_name)
}

pub fn time_report(formatted: &str) -> String {
    format!("Sir, the time is {formatted}")
}

pub fn renamed(name: &str) -> String {
    format!("Okay, you can call me {name} from now on.")
}

pub fn my_name(name: &str) -> String {
    format!("My name is {name}.")
}

pub fn wiki_ambiguous(topic: &str, options: &[String]) -> String {
    if options.is_empty() {
        format!("Your query '{topic}' led to multiple results. Please be more specific.")
    } else {
        format!(
            "Your query '{topic}' led to multiple results like {}. Please be more specific.",
            options.join(", ")
        )
    }
}

pub fn wiki_not_found(topic: &str) -> String {
    format!("Sorry, I could not find a Wikipedia page for {topic}.")
}
