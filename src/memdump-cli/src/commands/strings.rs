//! Standalone strings extraction over an existing dump directory.

use anyhow::Result;
use std::path::Path;

pub fn handle(dir: &Path, min_len: usize) -> Result<()> {
    let out = memdump::extract_strings(dir, min_len)?;
    println!("Strings written to {}", out.display());
    Ok(())
}
