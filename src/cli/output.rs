//! Output formatting utilities

use crate::domain::Note;
use crate::error::Result;

/// Serialize a note as a single JSON object
pub fn format_note(note: &Note, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(note)?
    } else {
        serde_json::to_string(note)?
    };
    Ok(json)
}
