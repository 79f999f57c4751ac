//! Wall-clock access and the time formats the assistant speaks.

use chrono::{NaiveTime, Timelike};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    /// Current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Local system time via `chrono`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Clock reading `hour:minute:00`. Out-of-range values fall back to midnight.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// 12-hour time with a zero-padded hour, e.g. `02:05 PM`.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Part of the day used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// `[0, 12)`
    Morning,
    /// `[12, 18)`
    Afternoon,
    /// `[18, 24)`
    Evening,
}

impl DayPeriod {
    /// Period for an hour of the day. Hours wrap modulo 24.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            0..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Period for a time of day.
    pub fn of(time: NaiveTime) -> Self {
        Self::from_hour(time.hour())
    }
}
