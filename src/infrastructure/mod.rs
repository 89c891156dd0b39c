//! Infrastructure layer - Configuration and document input

pub mod config;
pub mod input;

pub use config::Config;
pub use input::DocumentSource;
