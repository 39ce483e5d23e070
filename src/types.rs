use std::ffi::OsString;
use std::path::PathBuf;

use indexmap::IndexMap;

/// Base filename to byte size. Later files overwrite earlier ones that share a name.
pub type SizeMap = IndexMap<OsString, u64>;

/// Presence differences between a source and a destination tree, by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceDiff {
    /// Present under the source root only.
    pub missing_in_dest: Vec<PathBuf>,
    /// Present under the destination root only.
    pub missing_in_src: Vec<PathBuf>,
}

impl PresenceDiff {
    pub fn is_empty(&self) -> bool {
        self.missing_in_dest.is_empty() && self.missing_in_src.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialCopy {
    pub name: OsString,
    pub source_size: u64,
    pub dest_size: u64,
}

impl PartialCopy {
    pub fn missing_bytes(&self) -> u64 {
        self.source_size.saturating_sub(self.dest_size)
    }
}
