//! Domain layer - Note extraction and the note record

pub mod aggregate;
pub mod note;
pub mod parser;
pub mod title_policy;

pub use note::{Link, Note};
pub use parser::{classify_line, LineKind, NoteParser};
pub use title_policy::TitlePolicy;
