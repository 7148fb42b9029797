//! Region reader, chunk splitter, and the top-level dump driver.
//!
//! The driver visits every region exactly once and never aborts the run for
//! a single region's failure: success means "every region was attempted".

use super::config::{DumpConfig, WarnPolicy};
use super::writer;
use crate::agent::MemoryAgent;
use crate::region::MemoryRegion;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum DumpError {
    /// A read failed because the span became unreadable. Expected and
    /// common; subject to the warning-suppression policy.
    #[error("memory at {base:#x} ({size} bytes) is not readable")]
    AccessDenied { base: u64, size: u64 },

    /// Writing an artifact failed. Always logged.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counters for one run, returned by [`DumpEngine::dump_all`].
///
/// `access_denied` keeps the full failure count even when the matching log
/// lines are suppressed; `access_warnings` is how many were actually logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpStats {
    pub regions: u64,
    pub artifacts: u64,
    pub bytes_written: u64,
    pub access_denied: u64,
    pub access_warnings: u64,
    pub io_errors: u64,
}

/// Sequential dump driver. One engine per run; the warning flag is a plain
/// field because nothing here is concurrent.
pub struct DumpEngine<'a, A: MemoryAgent + ?Sized> {
    agent: &'a A,
    config: DumpConfig,
    warned: bool,
    stats: DumpStats,
}

impl<'a, A: MemoryAgent + ?Sized> DumpEngine<'a, A> {
    pub fn new(agent: &'a A, config: DumpConfig) -> Self {
        DumpEngine {
            agent,
            config,
            warned: false,
            stats: DumpStats::default(),
        }
    }

    /// Dump every region in the order supplied, splitting oversized ones
    /// into chunks. Consumes the engine; a new run gets a new engine.
    pub fn dump_all(mut self, regions: &[MemoryRegion]) -> DumpStats {
        for region in regions {
            self.stats.regions += 1;
            if self.config.warn_policy == WarnPolicy::OncePerRegion {
                self.warned = false;
            }

            debug!("region {:#x} ({} bytes)", region.base, region.size);

            if region.size > self.config.max_artifact_size {
                self.dump_split(region.base, region.size);
            } else {
                self.dump_span(region.base, region.size);
            }
        }

        self.stats
    }

    /// Chunk Splitter: carve an oversized region into spans no larger than
    /// the configured cap and dump each one. A failed chunk is recorded and
    /// skipped; the remaining chunks are still attempted.
    fn dump_split(&mut self, base: u64, size: u64) {
        let before = self.stats.artifacts;
        let mut chunks = 0u64;

        for (offset, len) in chunk_spans(size, self.config.max_artifact_size) {
            self.dump_span(base + offset, len);
            chunks += 1;
        }

        debug!(
            "split region {:#x}: {}/{} chunks written",
            base,
            self.stats.artifacts - before,
            chunks
        );
    }

    /// Dump one span to one artifact. Failures are recorded, never
    /// propagated.
    fn dump_span(&mut self, base: u64, size: u64) {
        let result = self.read_span(base, size).and_then(|bytes| {
            writer::write_artifact(&self.config.output_dir, base, size, &bytes)
        });

        match result {
            Ok(_) => {
                self.stats.artifacts += 1;
                self.stats.bytes_written += size;
            }
            Err(err) => self.record_failure(err),
        }
    }

    /// Region Reader: a single agent read, converted into a typed outcome.
    /// No retries at this layer; the splitter already retries at finer
    /// granularity by carving the region up.
    fn read_span(&self, base: u64, size: u64) -> Result<Vec<u8>, DumpError> {
        self.agent.read_bytes(base, size as usize).map_err(|err| {
            debug!("read at {:#x} failed: {:#}", base, err);
            DumpError::AccessDenied { base, size }
        })
    }

    fn record_failure(&mut self, err: DumpError) {
        match err {
            DumpError::AccessDenied { .. } => {
                self.stats.access_denied += 1;
                if !self.warned {
                    self.warned = true;
                    self.stats.access_warnings += 1;
                    warn!("{}; further access warnings suppressed", err);
                }
            }
            DumpError::Io(_) => {
                self.stats.io_errors += 1;
                error!("failed to write artifact: {}", err);
            }
        }
    }
}

/// Partition `size` bytes into `(offset, len)` spans of at most `max` bytes.
/// The final span is short when `size` is not a multiple of `max`.
pub(crate) fn chunk_spans(size: u64, max: u64) -> impl Iterator<Item = (u64, u64)> {
    debug_assert!(max > 0);
    let mut offset = 0;
    std::iter::from_fn(move || {
        if offset >= size {
            return None;
        }
        let len = max.min(size - offset);
        let span = (offset, len);
        offset += len;
        Some(span)
    })
}
