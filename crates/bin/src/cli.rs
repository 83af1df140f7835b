//! CLI argument definitions for the keypath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Encoding of flattened input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON object of string keys to string values
    Json,
    /// URL-encoded query or form body (`a.b=1&a.c=2`)
    Query,
    /// One `key=value` per line; blank lines and `#` comments are skipped
    Lines,
}

/// Unpack flat dot-delimited keys into nested JSON
#[derive(Parser, Debug)]
#[command(name = "keypath")]
#[command(about = "Convert between flat dot-delimited keys and nested JSON")]
#[command(version)]
pub struct Cli {
    /// Print single-line JSON instead of pretty-printed output
    #[arg(long, global = true, env = "KEYPATH_COMPACT")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Unpack flattened pairs into a nested tree
    Unpack(UnpackArgs),
    /// Flatten a nested JSON tree into dotted keys
    Flatten(FlattenArgs),
}

/// Arguments for the unpack command
#[derive(clap::Args, Debug)]
pub struct UnpackArgs {
    /// Input file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Encoding of the input
    #[arg(short, long, default_value = "json", env = "KEYPATH_FORMAT")]
    pub format: InputFormat,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// Input file holding a JSON tree (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,
}
