use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date of a puzzle, always handled in calendar-date space
/// (never as a UTC instant) so that window arithmetic cannot drift at
/// local-midnight boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        NaiveDate::parse_from_str(value.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|err| format!("Invalid puzzle date '{value}': {err}"))
    }

    /// Lenient variant for data that crosses a trust boundary (remote
    /// snapshots, stored rows): malformed input becomes `None` instead
    /// of an error.
    pub fn parse_opt(value: &str) -> Option<Self> {
        Self::parse(value).ok()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl From<NaiveDate> for PuzzleDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
