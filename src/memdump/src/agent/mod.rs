//! Memory Agent Abstraction
//!
//! The seam between the dump engine and whatever actually performs memory
//! access inside the target:
//! - Live process attachment via `ProcessAgent`
//! - Scripted in-memory agents for testing via `MockAgent`

#[cfg(test)]
pub(crate) mod mock;
mod process;
mod traits;

pub use process::{find_process, ProcessAgent};
pub use traits::MemoryAgent;
