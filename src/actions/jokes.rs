//! One-liners for the joke intent.

use rand::Rng;
use rand::seq::SliceRandom;

pub const JOKES: &[&str] = &[
    "There are only 10 kinds of people in this world: those who know binary and those who don't.",
    "A programmer's partner asks them to buy a loaf of bread and, if there are eggs, a dozen. They come home with twelve loaves.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "Why did the developer go broke? Because they used up all their cache.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "Knock knock. Race condition. Who's there?",
    "A SQL query walks into a bar, walks up to two tables and asks: can I join you?",
    "Why do Java developers wear glasses? Because they don't see sharp.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
];

/// Pick a joke with the given RNG.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES.choose(rng).copied().unwrap_or(JOKES[0])
}

/// Pick a joke with the thread-local RNG.
pub fn random() -> &'static str {
    pick(&mut rand::thread_rng())
}
