//! Convert a note document into its structured record

use crate::domain::{Note, NoteParser, TitlePolicy};
use crate::error::Result;
use crate::infrastructure::{Config, DocumentSource};
use std::borrow::Cow;

/// Options controlling extraction and output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub title_policy: TitlePolicy,
    pub pretty: bool,
}

impl ConvertOptions {
    /// Start from config values; explicit overrides win
    pub fn from_config(
        config: &Config,
        title_policy: Option<TitlePolicy>,
        pretty: Option<bool>,
    ) -> Self {
        ConvertOptions {
            title_policy: title_policy.unwrap_or(config.title_policy),
            pretty: pretty.unwrap_or(config.pretty),
        }
    }
}

/// Service for extracting a note from one document
pub struct ConvertService {
    parser: NoteParser,
}

impl ConvertService {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            parser: NoteParser::new(options.title_policy),
        }
    }

    /// Read the whole document from `source` and extract its note
    pub fn extract(&self, source: &DocumentSource) -> Result<Note> {
        log::debug!("Reading document from {}", source.describe());
        let bytes = source.read_bytes()?;
        Ok(self.extract_bytes(&bytes))
    }

    /// Extract from raw bytes. Invalid UTF-8 is replaced, never rejected.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Note {
        let text = String::from_utf8_lossy(bytes);
        if matches!(text, Cow::Owned(_)) {
            log::warn!("Document is not valid UTF-8; invalid sequences were replaced");
        }
        self.parser.parse(&text)
    }
}
