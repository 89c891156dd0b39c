//! Note record produced by the extractor

use crate::domain::parser::NoteParser;
use serde::{Deserialize, Serialize};

/// A cross-reference target and how many times it was mentioned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub count: usize,
}

impl Link {
    pub fn new(title: impl Into<String>, count: usize) -> Self {
        Link {
            title: title.into(),
            count,
        }
    }
}

/// Structured summary of a single note document.
///
/// `title` is empty when the document has no title line. `tags` holds
/// unique tags in first-seen order. `links` holds one entry per distinct
/// target; consumers must treat its order as unspecified. Link targets are
/// trimmed, so `[[ X ]]` and `[[X]]` count as the same target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub tags: Vec<String>,
    pub links: Vec<Link>,
}

impl Note {
    /// Extract a note from text using the default title policy
    pub fn parse(text: &str) -> Self {
        NoteParser::default().parse(text)
    }

    /// Number of times `target` was referenced, if at all
    pub fn link_count(&self, target: &str) -> Option<usize> {
        self.links
            .iter()
            .find(|link| link.title == target)
            .map(|link| link.count)
    }
}
