//! Listed entry representation.

use std::path::{Path, PathBuf};

use crate::fs::provider::RawEntry;
use crate::fs::size::format_size;

/// A single file or directory shown in the chooser listing.
///
/// `Entry` is immutable and created fresh on every listing; the previous
/// listing's entries are discarded when the directory is re-listed.
/// Two entries are the same item when their paths are equal.
/// Directory sizes are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    path: PathBuf,
    name: String,
    size: Option<u64>,
    is_dir: bool,
    is_hidden: bool,
}

impl Entry {
    /// Creates an entry from explicit parts.
    ///
    /// The size of a directory is always dropped.
    pub fn new(
        path: PathBuf,
        name: impl Into<String>,
        size: Option<u64>,
        is_dir: bool,
        is_hidden: bool,
    ) -> Self {
        Self {
            path,
            name: name.into(),
            size: if is_dir { None } else { size },
            is_dir,
            is_hidden,
        }
    }

    /// Materialises an entry from a raw file-system child.
    pub fn from_raw(raw: &RawEntry) -> Self {
        Self::new(
            raw.path.clone(),
            raw.name.clone(),
            raw.size,
            raw.is_dir,
            raw.hidden.unwrap_or(false),
        )
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes. `None` for directories.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Human readable size, empty for directories.
    pub fn display_size(&self) -> String {
        self.size.map(format_size).unwrap_or_default()
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the OS reported this entry as hidden.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}
