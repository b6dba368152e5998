//! CLI argument definitions for the guidedoc binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Which aggregate a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocKind {
    /// Detect from the fields present (default)
    Auto,
    /// A guide with steps, access entries and tags
    Guide,
    /// A content descriptor with title, media and messages
    Content,
}

/// Which skeleton the `new` command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NewKind {
    Guide,
    Content,
}

/// Guidedoc: inspect, validate and format guide documents
#[derive(Parser, Debug)]
#[command(name = "guidedoc")]
#[command(about = "Guidedoc: validate, inspect and format guide and content documents")]
#[command(version)]
pub struct Cli {
    /// Pretty-print exported documents
    #[arg(long, global = true, env = "GUIDEDOC_PRETTY")]
    pub pretty: bool,

    /// Output format for reports
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "GUIDEDOC_OUTPUT"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate a document
    Check(DocArgs),
    /// Print a summary of a document
    Show(DocArgs),
    /// Re-export a document in canonical form
    Fmt(FmtArgs),
    /// Print a fresh skeleton document
    New(NewArgs),
}

/// A document file and how to interpret it
#[derive(clap::Args, Debug)]
pub struct DocArgs {
    /// Path to the JSON document
    pub file: PathBuf,

    /// Kind of document
    #[arg(short, long, value_enum, default_value = "auto")]
    pub kind: DocKind,
}

/// Arguments for the fmt command
#[derive(clap::Args, Debug)]
pub struct FmtArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the new command
#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Kind of skeleton
    #[arg(value_enum)]
    pub kind: NewKind,

    /// Id of the new guide or content descriptor
    pub id: String,
}
