//! Artifact Writer
//!
//! Deterministic file naming and output for one dumped span.

use super::engine::DumpError;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact file name for a span: hexadecimal base plus decimal size.
///
/// Two runs over the same layout produce identical names, and two spans in
/// one run can never collide because each span is uniquely addressed by
/// `(base, size)`. Downstream tooling (the strings pass) enumerates dump
/// files by this scheme, so it must stay stable.
pub fn artifact_path(dir: &Path, base: u64, size: u64) -> PathBuf {
    dir.join(format!("0x{:x}_{}.data", base, size))
}

/// Create or truncate the artifact for this span and write the payload.
pub fn write_artifact(dir: &Path, base: u64, size: u64, bytes: &[u8]) -> Result<PathBuf, DumpError> {
    let path = artifact_path(dir, base, size);
    fs::write(&path, bytes)?;
    Ok(path)
}
