//! Printable-strings extraction over dump artifacts.
//!
//! Post-processing pass over the `.data` files the engine produced; never
//! touches the agent. The output lands in `strings.txt` inside the dump
//! directory.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default minimum run length, matching the classic `strings` tool.
pub const DEFAULT_MIN_LEN: usize = 4;

/// Scan every `.data` artifact in `dump_dir` for printable-ASCII runs of at
/// least `min_len` bytes and write them, one per line, to `strings.txt`.
///
/// Files are visited in name order so repeated passes over an unchanged
/// dump produce identical output.
pub fn extract_strings(dump_dir: &Path, min_len: usize) -> Result<PathBuf> {
    let out_path = dump_dir.join("strings.txt");
    let file = fs::File::create(&out_path)
        .with_context(|| format!("Failed to create {}", out_path.display()))?;
    let mut out = BufWriter::new(file);

    let mut artifacts: Vec<PathBuf> = fs::read_dir(dump_dir)
        .with_context(|| format!("Failed to read dump directory {}", dump_dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("data"))
        .collect();
    artifacts.sort();

    let mut total = 0u64;
    for path in &artifacts {
        let data =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        let mut found = 0u64;
        for run in printable_runs(&data, min_len) {
            out.write_all(run)?;
            out.write_all(b"\n")?;
            found += 1;
        }
        total += found;
        debug!("{}: {} strings", path.display(), found);
    }

    out.flush()?;
    info!(
        "extracted {} strings from {} files into {}",
        total,
        artifacts.len(),
        out_path.display()
    );
    Ok(out_path)
}

/// Runs of printable ASCII (0x20..=0x7e) at least `min_len` bytes long.
fn printable_runs(data: &[u8], min_len: usize) -> impl Iterator<Item = &[u8]> {
    data.split(|b| !(0x20..=0x7e).contains(b))
        .filter(move |run| run.len() >= min_len)
}
