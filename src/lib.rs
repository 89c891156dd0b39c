//! bear-tools - Note extraction for plain-text notes
//!
//! Turns a note written in lightweight markup (a `# ` title line, `#tag`
//! markers and `[[link]]` cross-references) into a structured record that
//! serializes to JSON.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Link, Note, NoteParser, TitlePolicy};
pub use error::BearError;
