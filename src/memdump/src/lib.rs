//! # memdump
//!
//! Process memory dumper library - enumeration, chunked dumping, and strings
//! extraction.
//!
//! This library provides functionality to:
//! - Attach to a running process and enumerate its memory regions
//! - Dump every matching region into bounded-size artifact files on disk
//! - Tolerate regions that become unreadable mid-dump without aborting
//! - Extract printable strings from the dumped artifacts
//!
//! ## Example
//!
//! ```no_run
//! use memdump::{DumpConfig, DumpEngine, MemoryAgent, ProcessAgent, Protection};
//!
//! # fn main() -> anyhow::Result<()> {
//! let agent = ProcessAgent::attach("target-app")?;
//! let regions = agent.enumerate_regions(&Protection::read_write())?;
//!
//! std::fs::create_dir_all("dump")?;
//! let config = DumpConfig::new("dump", memdump::DEFAULT_MAX_ARTIFACT_SIZE)?;
//!
//! let stats = DumpEngine::new(&agent, config).dump_all(&regions);
//! println!("{} artifacts, {} unreadable spans", stats.artifacts, stats.access_denied);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod dump;
pub mod region;
pub mod strings;

// Re-export commonly used items
#[doc(inline)]
pub use agent::{MemoryAgent, ProcessAgent};
#[doc(inline)]
pub use dump::{
    ConfigError, DumpConfig, DumpEngine, DumpError, DumpStats, WarnPolicy,
    DEFAULT_MAX_ARTIFACT_SIZE,
};
#[doc(inline)]
pub use region::{MemoryRegion, Protection};
#[doc(inline)]
pub use strings::extract_strings;
