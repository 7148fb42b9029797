//! Command handlers for the memdump CLI
//!
//! Each subcommand has its own module with a handler function.

pub mod dump;
pub mod strings;
