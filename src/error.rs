//! Error types for bear-tools
//!
//! Note extraction itself never fails; these cover reading input,
//! loading configuration and writing JSON.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bear-tools
#[derive(Debug, Error)]
pub enum BearError {
    #[error("Document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BearError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BearError::DocumentNotFound(_) => 2,
            BearError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BearError::DocumentNotFound(path) => {
                format!(
                    "Document not found: {}\n\n\
                    Suggestions:\n\
                    • Check the file path\n\
                    • Omit the path (or pass '-') to read the note from stdin",
                    path.display()
                )
            }
            BearError::Config(msg) => {
                if msg.contains("Invalid title policy") {
                    format!(
                        "{}\n\n\
                        Example: bear-tools json --title-policy first",
                        msg
                    )
                } else if msg.contains("Config file") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Check the --config path\n\
                        • Unset BEAR_TOOLS_CONFIG to use defaults",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BearError
pub type Result<T> = std::result::Result<T, BearError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            BearError::DocumentNotFound(PathBuf::from("missing.md")).exit_code(),
            2
        );
        assert_eq!(BearError::Config("bad".to_string()).exit_code(), 3);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(BearError::Io(io).exit_code(), 1);
    }

    #[test]
    fn test_document_not_found_suggestions() {
        let err = BearError::DocumentNotFound(PathBuf::from("/tmp/note.md"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/note.md"));
        assert!(msg.contains("stdin"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_title_policy_suggestions() {
        let err = BearError::Config("Invalid title policy: 'middle'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--title-policy first"));
    }

    #[test]
    fn test_config_file_suggestions() {
        let err = BearError::Config("Config file not found: /nope.toml".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("BEAR_TOOLS_CONFIG"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
        let msg = BearError::Io(io).display_with_suggestions();
        assert_eq!(msg, "IO error: broken pipe");
    }
}
