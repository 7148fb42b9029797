//! Memory Region Types
//!
//! Data structures for memory regions and the permission masks used to
//! select them.

use std::fmt;

/// A contiguous span of target address space, as reported by the agent.
///
/// Addresses and sizes are `u64` so chunk-offset arithmetic stays exact for
/// regions larger than 4 GiB; conversion to `usize` happens only at the
/// process read boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    pub base: u64,
    pub size: u64,
    pub perms: String,
    pub path: Option<String>,
}

impl MemoryRegion {
    pub fn end(&self) -> u64 {
        self.base + self.size
    }

    pub fn is_readable(&self) -> bool {
        self.perms.starts_with('r')
    }

    pub fn is_writable(&self) -> bool {
        self.perms.chars().nth(1) == Some('w')
    }

    pub fn is_executable(&self) -> bool {
        self.perms.chars().nth(2) == Some('x')
    }
}

/// Permission mask in the agent's `rwx` notation; a `-` position is a
/// wildcard, so `rw-` matches `rw-p` and `rwxp` alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Protection {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Protection {
    /// `rw-`: the default dump mask.
    pub fn read_write() -> Self {
        Protection {
            read: true,
            write: true,
            execute: false,
        }
    }

    /// `r--`: includes read-only mappings. More data, more read errors.
    pub fn read_only() -> Self {
        Protection {
            read: true,
            write: false,
            execute: false,
        }
    }

    /// Parse a mask like `"rw-"` or `"r-x"`. Returns `None` on malformed input.
    pub fn from_mask(mask: &str) -> Option<Self> {
        let flag = |c: Option<char>, set: char| match c {
            Some(c) if c == set => Some(true),
            Some('-') => Some(false),
            _ => None,
        };

        let mut chars = mask.chars();
        let read = flag(chars.next(), 'r')?;
        let write = flag(chars.next(), 'w')?;
        let execute = flag(chars.next(), 'x')?;
        if chars.next().is_some() {
            return None;
        }

        Some(Protection {
            read,
            write,
            execute,
        })
    }

    /// True when every flag the mask requires is present on the region.
    pub fn matches(&self, region: &MemoryRegion) -> bool {
        (!self.read || region.is_readable())
            && (!self.write || region.is_writable())
            && (!self.execute || region.is_executable())
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.read { 'r' } else { '-' },
            if self.write { 'w' } else { '-' },
            if self.execute { 'x' } else { '-' },
        )
    }
}
