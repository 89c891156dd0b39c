//! Which title line wins when a document has several

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitlePolicy {
    /// Every title line overwrites the previous one
    #[default]
    Last,
    /// The earliest title line is kept
    First,
}

impl TitlePolicy {
    /// Whether a new title line should replace the current title
    pub fn should_replace(&self, current: Option<&str>) -> bool {
        match self {
            TitlePolicy::Last => true,
            TitlePolicy::First => current.is_none(),
        }
    }
}

impl FromStr for TitlePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last" => Ok(TitlePolicy::Last),
            "first" => Ok(TitlePolicy::First),
            _ => Err(format!(
                "Invalid title policy: '{}'. Valid policies: first, last",
                s
            )),
        }
    }
}

impl fmt::Display for TitlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitlePolicy::Last => write!(f, "last"),
            TitlePolicy::First => write!(f, "first"),
        }
    }
}
