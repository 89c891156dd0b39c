//! Note extraction from plain-text markup
//!
//! Each line falls into exactly one category, checked in this order:
//!
//! 1. blank (zero characters), skipped
//! 2. title, starts with `"# "`
//! 3. tags, holds at least one `#token` at line start or after whitespace
//! 4. content, scanned for `[[target]]` links
//!
//! A tag line is never scanned for links, even when it contains some.
//!
//! # Examples
//!
//! ```
//! use bear_tools::domain::NoteParser;
//!
//! let note = NoteParser::default().parse("# Title\n#work #idea\nSee [[Other]]\n");
//! assert_eq!(note.title, "Title");
//! assert_eq!(note.tags, vec!["work", "idea"]);
//! assert_eq!(note.link_count("Other"), Some(1));
//! ```

use crate::domain::aggregate::{link_frequencies, unique_in_order};
use crate::domain::note::Note;
use crate::domain::title_policy::TitlePolicy;
use regex::Regex;
use std::sync::OnceLock;

const MARKER: char = '#';
const TITLE_PREFIX: &str = "# ";

/// Marker followed by non-whitespace, at line start or after whitespace
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:^|\s)#\S+").unwrap())
}

/// `[[target]]`, one match per bracket pair
fn link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap())
}

/// Classification of a single document line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Title text with the leading marker and spaces removed
    Title(&'a str),
    /// Normalized tags; may be empty when every token was a bare marker
    Tags(Vec<String>),
    /// Normalized link targets; empty for plain prose
    Content(Vec<String>),
}

/// Classify one line (without its terminator)
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with(TITLE_PREFIX) {
        return LineKind::Title(line.trim_start_matches([MARKER, ' ']));
    }

    let mut tokens = tag_regex().find_iter(line).peekable();
    if tokens.peek().is_some() {
        return LineKind::Tags(
            tokens
                .filter_map(|token| normalize_tag(token.as_str()))
                .collect(),
        );
    }

    LineKind::Content(
        link_regex()
            .captures_iter(line)
            .filter_map(|cap| normalize_link(&cap[1]))
            .collect(),
    )
}

/// Strip whitespace and the leading marker run; `None` if nothing remains
fn normalize_tag(token: &str) -> Option<String> {
    let tag = token.trim().trim_start_matches(MARKER).trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Strip whitespace and stray brackets; `None` if nothing remains
fn normalize_link(inner: &str) -> Option<String> {
    let target = inner.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']');
    (!target.is_empty()).then(|| target.to_string())
}

/// Single-pass note extractor. Total over all input text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteParser {
    title_policy: TitlePolicy,
}

impl NoteParser {
    pub fn new(title_policy: TitlePolicy) -> Self {
        NoteParser { title_policy }
    }

    /// Extract a note from a whole document. Accepts `\n` and `\r\n` endings.
    pub fn parse(&self, text: &str) -> Note {
        self.parse_lines(text.lines())
    }

    /// Extract a note from already split lines
    pub fn parse_lines<I, S>(&self, lines: I) -> Note
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut title: Option<String> = None;
        let mut tags: Vec<String> = Vec::new();
        let mut links: Vec<String> = Vec::new();
        let mut line_count = 0usize;

        for line in lines {
            let line = line.as_ref();
            line_count += 1;

            let kind = classify_line(line);
            log::trace!("line {}: {:?}", line_count, kind);

            match kind {
                LineKind::Blank => {}
                LineKind::Title(text) => {
                    // An empty title line never locks out a later one
                    let current = title.as_deref().filter(|t| !t.is_empty());
                    if self.title_policy.should_replace(current) {
                        title = Some(text.to_string());
                    }
                }
                LineKind::Tags(found) => tags.extend(found),
                LineKind::Content(found) => links.extend(found),
            }
        }

        let note = Note {
            title: title.unwrap_or_default(),
            tags: unique_in_order(tags),
            links: link_frequencies(links),
        };

        log::debug!(
            "Parsed {} lines: title={:?}, {} tags, {} distinct links",
            line_count,
            note.title,
            note.tags.len(),
            note.links.len()
        );

        note
    }
}
