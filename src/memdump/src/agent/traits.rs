//! Memory Agent Trait
//!
//! Core abstraction over the two primitives the dump engine needs from the
//! instrumentation side: enumerate regions, read bytes.

use crate::region::{MemoryRegion, Protection};
use anyhow::Result;

/// Trait for reading target memory through some attached agent.
///
/// Both calls are synchronous from the engine's point of view; an
/// asynchronous binding belongs behind a blocking adapter implementing this
/// trait.
pub trait MemoryAgent: Send + Sync {
    /// List the regions whose permissions satisfy the mask.
    ///
    /// Failure here is fatal to a run; it is surfaced once at startup,
    /// before any dumping begins.
    fn enumerate_regions(&self, mask: &Protection) -> Result<Vec<MemoryRegion>>;

    /// Read exactly `size` bytes at `base`.
    ///
    /// Must fail cleanly when the memory is unreadable; never returns a
    /// short or corrupt buffer.
    fn read_bytes(&self, base: u64, size: usize) -> Result<Vec<u8>>;
}
