//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bear-tools")]
#[command(about = "Tools for plain-text notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a note from markup to JSON
    Json {
        /// Note file to read (default: stdin, also "-")
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long, conflicts_with = "compact")]
        pretty: bool,

        /// Single-line JSON output, even if the config enables pretty
        #[arg(long)]
        compact: bool,

        /// Which title line wins when there are several (first, last)
        #[arg(short, long, value_name = "POLICY")]
        title_policy: Option<String>,

        /// Config file (default: $BEAR_TOOLS_CONFIG)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}
