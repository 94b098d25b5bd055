//! Proficiency level chosen by the user; sent to the backend to tailor correction difficulty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four levels offered in the `#nivel` menu. Serialized with the lowercase wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Basic,
        Level::Intermediate,
        Level::Advanced,
    ];

    /// Maps a menu choice (`"1"`..`"4"`) to a level. Anything else, including surrounding text, is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Level::Beginner),
            "2" => Some(Level::Basic),
            "3" => Some(Level::Intermediate),
            "4" => Some(Level::Advanced),
            _ => None,
        }
    }

    /// Wire name used in backend payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
