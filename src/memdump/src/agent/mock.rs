//! Mock Memory Agent
//!
//! A scripted agent for testing the dump engine: contiguous backing data,
//! optional per-range read denial, and a read counter.

use super::MemoryAgent;
use crate::region::{MemoryRegion, Protection};
use anyhow::{bail, Result};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockAgent {
    /// Raw memory data (contiguous, starting at `base_address`)
    data: Vec<u8>,
    /// Base virtual address for the data
    base_address: u64,
    /// Memory regions reported by enumeration
    regions: Vec<MemoryRegion>,
    /// Address ranges whose reads fail with an access violation
    denied: Vec<Range<u64>>,
    /// Number of read calls made
    reads: AtomicUsize,
}

impl MockAgent {
    /// Create a mock with one `rw-p` region covering `data` at `base_address`.
    pub fn new(data: Vec<u8>, base_address: u64) -> Self {
        let end = base_address + data.len() as u64;
        let regions = vec![MemoryRegion {
            base: base_address,
            size: end - base_address,
            perms: "rw-p".to_string(),
            path: None,
        }];
        Self::with_regions(data, base_address, regions)
    }

    /// Create with explicit regions over the same backing data.
    pub fn with_regions(data: Vec<u8>, base_address: u64, regions: Vec<MemoryRegion>) -> Self {
        MockAgent {
            data,
            base_address,
            regions,
            denied: Vec::new(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Make every read overlapping `range` fail.
    pub fn deny_range(mut self, range: Range<u64>) -> Self {
        self.denied.push(range);
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl MemoryAgent for MockAgent {
    fn enumerate_regions(&self, mask: &Protection) -> Result<Vec<MemoryRegion>> {
        Ok(self
            .regions
            .iter()
            .filter(|r| mask.matches(r))
            .cloned()
            .collect())
    }

    fn read_bytes(&self, base: u64, size: usize) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        let end = base + size as u64;
        if self.denied.iter().any(|d| base < d.end && d.start < end) {
            bail!("access violation reading {:#x}", base);
        }

        if base < self.base_address {
            bail!("address {:#x} below base {:#x}", base, self.base_address);
        }

        let offset = (base - self.base_address) as usize;
        if offset + size > self.data.len() {
            bail!(
                "read of {} bytes at {:#x} exceeds data size {}",
                size,
                base,
                self.data.len()
            );
        }

        Ok(self.data[offset..offset + size].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_read_bytes() {
        let agent = MockAgent::new(vec![0x41, 0x42, 0x43, 0x44], 0x1000);

        assert_eq!(agent.read_bytes(0x1000, 4).unwrap(), b"ABCD");
        assert_eq!(agent.read_bytes(0x1001, 2).unwrap(), b"BC");
        assert_eq!(agent.read_count(), 2);
    }

    #[test]
    fn test_mock_read_out_of_bounds() {
        let agent = MockAgent::new(vec![0x41, 0x42, 0x43, 0x44], 0x1000);

        assert!(agent.read_bytes(0x1002, 10).is_err());
        assert!(agent.read_bytes(0x500, 4).is_err());
    }

    #[test]
    fn test_mock_denied_range() {
        let agent = MockAgent::new(vec![0u8; 0x100], 0x1000).deny_range(0x1040..0x1080);

        assert!(agent.read_bytes(0x1000, 0x40).is_ok());
        assert!(agent.read_bytes(0x1040, 0x10).is_err());
        // overlapping the tail of the denied range
        assert!(agent.read_bytes(0x1070, 0x20).is_err());
        assert!(agent.read_bytes(0x1080, 0x20).is_ok());
    }

    #[test]
    fn test_mock_enumerate_filters_by_mask() {
        let regions = vec![
            MemoryRegion {
                base: 0x1000,
                size: 0x1000,
                perms: "r--p".to_string(),
                path: None,
            },
            MemoryRegion {
                base: 0x2000,
                size: 0x1000,
                perms: "rw-p".to_string(),
                path: None,
            },
        ];
        let agent = MockAgent::with_regions(vec![0u8; 0x2000], 0x1000, regions);

        let rw = agent.enumerate_regions(&Protection::read_write()).unwrap();
        assert_eq!(rw.len(), 1);
        assert_eq!(rw[0].base, 0x2000);

        let ro = agent.enumerate_regions(&Protection::read_only()).unwrap();
        assert_eq!(ro.len(), 2);
    }
}
