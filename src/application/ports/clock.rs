use chrono::{Local, NaiveDate};

/// Authorized current date in the user's local zone, as a calendar
/// date. Lock decisions and the incomplete filter take "today" from
/// here so tests can pin the clock.
pub trait ClockSource: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
