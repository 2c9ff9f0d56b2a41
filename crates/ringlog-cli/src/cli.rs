//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use ringlog_core::MessageKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ringlog")]
#[command(version, about = "Write to, inspect and export a rotating ring of log files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ringlog.toml in the data directory)
    #[arg(long, global = true, env = "RINGLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ring directory, overrides the config file
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Number of files in the ring, overrides the config file
    #[arg(long, global = true)]
    pub files: Option<usize>,

    /// Size of each file in bytes, overrides the config file
    #[arg(long, global = true)]
    pub size: Option<u64>,

    /// Output in JSON format instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a message through the console and file ring
    Write(WriteArgs),

    /// Show the slots of the ring
    Files,

    /// Concatenate the ring, oldest file first, into DEST
    Export {
        /// Destination file
        dest: PathBuf,
    },
}

#[derive(Args)]
pub struct WriteArgs {
    /// Message kind (debug, error, fatal, info, raw, verbose, warning)
    #[arg(short, long, default_value = "info")]
    pub kind: MessageKind,

    /// Wait for delivery before returning
    #[arg(long)]
    pub sync: bool,

    /// Message text; words are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}
