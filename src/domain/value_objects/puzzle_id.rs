use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PuzzleId(String);

impl PuzzleId {
    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Puzzle id cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PuzzleId> for String {
    fn from(id: PuzzleId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(PuzzleId::new(String::new()).is_err());
        assert!(PuzzleId::new("   ".to_string()).is_err());
    }

    #[test]
    fn keeps_value_intact() {
        let id = PuzzleId::new("puzzle-2025-01-01".to_string()).unwrap();
        assert_eq!(id.as_str(), "puzzle-2025-01-01");
    }
}
