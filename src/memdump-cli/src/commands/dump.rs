//! Dump command handler: attach, enumerate, run the engine, report.

use anyhow::{Context, Result};
use memdump::{DumpConfig, DumpEngine, MemoryAgent, ProcessAgent, Protection, WarnPolicy};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct DumpArgs<'a> {
    pub process: &'a str,
    pub out: &'a Path,
    pub read_only: bool,
    pub max_size: u64,
    pub warn_per_region: bool,
    pub strings: bool,
}

pub fn handle(args: &DumpArgs<'_>) -> Result<()> {
    let agent = ProcessAgent::attach(args.process)
        .with_context(|| format!("Failed to attach to '{}'", args.process))?;
    info!("attached: {}", agent.info());

    if !args.out.exists() {
        info!("creating output directory {}", args.out.display());
        fs::create_dir_all(args.out)
            .with_context(|| format!("Failed to create {}", args.out.display()))?;
    }

    let policy = if args.warn_per_region {
        WarnPolicy::OncePerRegion
    } else {
        WarnPolicy::OncePerRun
    };
    let config = DumpConfig::new(args.out, args.max_size)?.with_warn_policy(policy);

    let mask = if args.read_only {
        Protection::read_only()
    } else {
        Protection::read_write()
    };
    let regions = agent
        .enumerate_regions(&mask)
        .context("Failed to enumerate memory regions")?;
    info!(
        "dumping {} regions (mask {}) to {}",
        regions.len(),
        mask,
        args.out.display()
    );

    let stats = DumpEngine::new(&agent, config).dump_all(&regions);

    println!("Dump complete:");
    println!("  Regions:       {}", stats.regions);
    println!("  Artifacts:     {}", stats.artifacts);
    println!("  Bytes written: {}", stats.bytes_written);
    if stats.access_denied > 0 {
        println!("  Unreadable:    {} spans", stats.access_denied);
    }
    if stats.io_errors > 0 {
        println!("  Write errors:  {}", stats.io_errors);
    }

    if args.strings {
        let out = memdump::extract_strings(args.out, memdump::strings::DEFAULT_MIN_LEN)?;
        println!("Strings written to {}", out.display());
    }

    Ok(())
}
