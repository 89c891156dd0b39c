//! Document input sources

use crate::error::{BearError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the note text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `None` or `-` means stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => DocumentSource::File(p),
            _ => DocumentSource::Stdin,
        }
    }

    /// Read the whole document as raw bytes
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            DocumentSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            DocumentSource::File(path) => fs::read(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BearError::DocumentNotFound(path.clone())
                } else {
                    BearError::Io(e)
                }
            }),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DocumentSource::Stdin => "<stdin>".to_string(),
            DocumentSource::File(path) => path.display().to_string(),
        }
    }
}
