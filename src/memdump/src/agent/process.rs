//! Live Process Agent
//!
//! Agent implementation for a running local process: region enumeration from
//! `/proc/pid/maps`, reads through a `process-memory` handle.

use super::MemoryAgent;
use crate::region::{MemoryRegion, Protection};

use anyhow::{bail, Context, Result};
use process_memory::{CopyAddress, ProcessHandle, TryIntoProcessHandle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use sysinfo::System;
use tracing::debug;

/// An attached target process.
pub struct ProcessAgent {
    pub pid: u32,
    handle: ProcessHandle,
    pub exe_path: PathBuf,
}

// SAFETY: the underlying OS handle is process-wide and can be used from any
// thread.
unsafe impl Send for ProcessAgent {}
unsafe impl Sync for ProcessAgent {}

impl MemoryAgent for ProcessAgent {
    fn enumerate_regions(&self, mask: &Protection) -> Result<Vec<MemoryRegion>> {
        let regions = parse_maps(self.pid)?;
        Ok(regions.into_iter().filter(|r| mask.matches(r)).collect())
    }

    fn read_bytes(&self, base: u64, size: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; size];
        self.handle
            .copy_address(base as usize, &mut buffer)
            .with_context(|| format!("Failed to read {} bytes at {:#x}", size, base))?;
        Ok(buffer)
    }
}

impl ProcessAgent {
    /// Attach to a running process by name or command-line substring.
    pub fn attach(name: &str) -> Result<Self> {
        let pid = find_process(name)?;
        Self::attach_pid(pid)
    }

    /// Attach to a specific PID.
    pub fn attach_pid(pid: u32) -> Result<Self> {
        let handle = (pid as process_memory::Pid)
            .try_into_process_handle()
            .context("Failed to attach to process. Try running with sudo.")?;

        let exe_path = std::fs::read_link(format!("/proc/{}/exe", pid))
            .unwrap_or_else(|_| PathBuf::from("unknown"));

        Ok(ProcessAgent {
            pid,
            handle,
            exe_path,
        })
    }

    /// Get process info summary.
    pub fn info(&self) -> String {
        format!("PID: {}, Executable: {}", self.pid, self.exe_path.display())
    }
}

/// Find a running process whose name or command line contains `name`.
///
/// When several match (threads, wrappers), prefer the one using the most
/// memory, deduplicated by thread group.
pub fn find_process(name: &str) -> Result<u32> {
    let mut system = System::new_all();
    system.refresh_all();

    let needle = name.to_lowercase();
    let mut candidates: Vec<(u32, u64)> = Vec::new();

    for process in system.processes().values() {
        let pid = process.pid().as_u32();
        let memory = process.memory();

        let in_cmdline = std::fs::read_to_string(format!("/proc/{}/cmdline", pid))
            .map(|c| c.to_lowercase().contains(&needle))
            .unwrap_or(false);
        let in_name = process.name().to_string_lossy().to_lowercase().contains(&needle);

        if in_name || in_cmdline {
            let tgid = get_tgid(pid).unwrap_or(pid);
            candidates.push((tgid, memory));
        }
    }

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.dedup_by(|a, b| a.0 == b.0);

    if let Some((pid, memory)) = candidates.first() {
        debug!(
            "found process matching '{}': PID {} (memory: {} MB)",
            name,
            pid,
            memory / 1_000_000
        );
        return Ok(*pid);
    }

    bail!("No process matching '{}' found. Is it running?", name)
}

/// Get the thread group ID (main process) for a given PID/TID.
fn get_tgid(pid: u32) -> Option<u32> {
    let status = std::fs::read_to_string(format!("/proc/{}/status", pid)).ok()?;
    for line in status.lines() {
        if line.starts_with("Tgid:") {
            return line.split_whitespace().nth(1)?.parse().ok();
        }
    }
    None
}

/// Parse `/proc/pid/maps` to get memory regions.
///
/// Malformed or zero-size lines are skipped; the engine relies on every
/// region it sees having `size > 0`.
pub fn parse_maps(pid: u32) -> Result<Vec<MemoryRegion>> {
    let maps_path = format!("/proc/{}/maps", pid);
    let file = File::open(&maps_path)
        .with_context(|| format!("Failed to open {}. Do you have permission?", maps_path))?;

    let reader = BufReader::new(file);
    let mut regions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(region) = parse_maps_line(&line) {
            regions.push(region);
        }
    }

    Ok(regions)
}

fn parse_maps_line(line: &str) -> Option<MemoryRegion> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (start, end) = parts.first()?.split_once('-')?;

    let start = u64::from_str_radix(start, 16).ok()?;
    let end = u64::from_str_radix(end, 16).ok()?;
    if end <= start {
        return None;
    }

    let perms = parts.get(1).unwrap_or(&"").to_string();
    let path = parts.get(5).map(|s| s.to_string());

    Some(MemoryRegion {
        base: start,
        size: end - start,
        perms,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_line() {
        let line = "7f1234560000-7f1234580000 rw-p 00000000 00:00 0   [heap]";
        let region = parse_maps_line(line).unwrap();

        assert_eq!(region.base, 0x7f1234560000);
        assert_eq!(region.size, 0x20000);
        assert_eq!(region.perms, "rw-p");
        assert_eq!(region.path.as_deref(), Some("[heap]"));
    }

    #[test]
    fn test_parse_maps_line_no_path() {
        let line = "55e000-55f000 r--p 00000000 08:01 123456";
        let region = parse_maps_line(line).unwrap();

        assert_eq!(region.base, 0x55e000);
        assert_eq!(region.size, 0x1000);
        assert_eq!(region.path, None);
    }

    #[test]
    fn test_parse_maps_line_rejects_garbage() {
        assert!(parse_maps_line("").is_none());
        assert!(parse_maps_line("not a maps line").is_none());
        // zero-size mapping
        assert!(parse_maps_line("1000-1000 rw-p 00000000 00:00 0").is_none());
        // end below start
        assert!(parse_maps_line("2000-1000 rw-p 00000000 00:00 0").is_none());
    }

    #[test]
    fn test_enumerate_self_filters_by_mask() {
        // Our own maps always contain at least one rw- region (the heap)
        // and at least one readable non-writable region.
        let pid = std::process::id();
        let regions = parse_maps(pid).unwrap();
        assert!(!regions.is_empty());
        assert!(regions.iter().all(|r| r.size > 0));

        let rw = Protection::read_write();
        assert!(regions.iter().any(|r| rw.matches(r)));
    }
}
