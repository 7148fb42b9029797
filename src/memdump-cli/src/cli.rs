//! CLI argument definitions for memdump
//!
//! All clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memdump")]
#[command(about = "Dump the readable memory of a running process", long_about = None)]
pub struct Cli {
    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump memory regions of a process into bounded-size files
    #[command(visible_alias = "d")]
    Dump {
        /// Process name (or command-line substring) to attach to
        process: String,

        /// Output directory for dump files (created if missing)
        #[arg(short, long, default_value = "dump")]
        out: PathBuf,

        /// Also dump read-only memory. More data, more errors
        #[arg(short, long)]
        read_only: bool,

        /// Maximum size of one dump file in bytes
        #[arg(long, default_value_t = memdump::DEFAULT_MAX_ARTIFACT_SIZE)]
        max_size: u64,

        /// Warn on every unreadable region instead of once per run
        #[arg(long)]
        warn_per_region: bool,

        /// Run strings extraction over the dump files afterwards
        #[arg(short, long)]
        strings: bool,
    },

    /// Extract printable strings from an existing dump directory
    #[command(visible_alias = "s")]
    Strings {
        /// Directory containing .data dump files
        dir: PathBuf,

        /// Minimum string length in bytes
        #[arg(long, default_value_t = memdump::strings::DEFAULT_MIN_LEN)]
        min_len: usize,
    },
}
