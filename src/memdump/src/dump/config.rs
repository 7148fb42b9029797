//! Dump configuration, validated at construction.

use std::path::PathBuf;
use thiserror::Error;

/// Default cap on one dump file: 20 MiB.
pub const DEFAULT_MAX_ARTIFACT_SIZE: u64 = 20 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max artifact size must be greater than zero")]
    ZeroMaxSize,

    #[error("output directory {0} does not exist or is not a directory")]
    BadOutputDir(PathBuf),
}

/// When to emit the "memory became unreadable" warning.
///
/// Access-denied reads are common and repetitive when dumping a large
/// process; the policy keeps them from flooding the log. The full failure
/// count stays observable through [`super::DumpStats`] either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarnPolicy {
    /// One access warning for the whole run (default).
    #[default]
    OncePerRun,
    /// One access warning per region.
    OncePerRegion,
}

/// Constant parameters for one dump run.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub max_artifact_size: u64,
    pub output_dir: PathBuf,
    pub warn_policy: WarnPolicy,
}

impl DumpConfig {
    /// Validate and build a config. The output directory must already exist;
    /// callers create it beforehand so a typo'd path fails here rather than
    /// mid-run.
    pub fn new(output_dir: impl Into<PathBuf>, max_artifact_size: u64) -> Result<Self, ConfigError> {
        let output_dir = output_dir.into();

        if max_artifact_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if !output_dir.is_dir() {
            return Err(ConfigError::BadOutputDir(output_dir));
        }

        Ok(DumpConfig {
            max_artifact_size,
            output_dir,
            warn_policy: WarnPolicy::default(),
        })
    }

    pub fn with_warn_policy(mut self, policy: WarnPolicy) -> Self {
        self.warn_policy = policy;
        self
    }
}
