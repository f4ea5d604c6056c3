use serde::{Deserialize, Serialize};
use std::fmt;

/// Game-mode tag of a catalog entry. The remote catalog may introduce
/// new modes before the client ships support for them, so unknown tags
/// round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Classic,
    Mini,
    Trivia,
    Unknown(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Classic => "classic",
            Category::Mini => "mini",
            Category::Trivia => "trivia",
            Category::Unknown(value) => value.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "classic" => Category::Classic,
            "mini" => Category::Mini,
            "trivia" => Category::Trivia,
            other => Category::Unknown(other.to_string()),
        }
    }
}
