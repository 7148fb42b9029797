//! Chunked Region Dump Engine
//!
//! Turns a list of memory regions into bounded-size artifact files on disk:
//! - `config`: run parameters, validated before the loop starts
//! - `writer`: deterministic `(base, size)` artifact naming and file output
//! - `engine`: region reader, chunk splitter, and the top-level dump driver

mod config;
mod engine;
mod writer;

pub use config::{ConfigError, DumpConfig, WarnPolicy, DEFAULT_MAX_ARTIFACT_SIZE};
pub use engine::{DumpEngine, DumpError, DumpStats};
pub use writer::artifact_path;
