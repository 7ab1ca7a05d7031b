//! Directory listing: filtering raw children and sorting them into entries.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::fs::provider::{FileSystem, RawEntry};
use crate::mode::ChooserMode;

/// Predicate deciding which raw children become listed entries.
///
/// The chooser passes its current mode on every call, so a filter never
/// goes stale when the chooser switches between open and save. Any
/// `Fn(&RawEntry, ChooserMode) -> bool` closure is a filter.
pub trait EntryFilter {
    fn accept(&self, raw: &RawEntry, mode: ChooserMode) -> bool;
}

impl<F> EntryFilter for F
where
    F: Fn(&RawEntry, ChooserMode) -> bool,
{
    fn accept(&self, raw: &RawEntry, mode: ChooserMode) -> bool {
        self(raw, mode)
    }
}

/// The chooser's default predicate.
///
/// Rejects hidden children, then requires read permission in
/// [`ChooserMode::Open`] or write permission in [`ChooserMode::Save`].
/// Both checks look at the raw child independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFilter;

impl EntryFilter for DefaultFilter {
    fn accept(&self, raw: &RawEntry, mode: ChooserMode) -> bool {
        if raw.hidden == Some(true) {
            return false;
        }
        match mode {
            ChooserMode::Open => raw.readable,
            ChooserMode::Save => raw.writable,
        }
    }
}

/// Default predicate plus a case-insensitive extension whitelist.
///
/// Directories always pass the extension check so they remain navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }
}

impl EntryFilter for ExtensionFilter {
    fn accept(&self, raw: &RawEntry, mode: ChooserMode) -> bool {
        if !DefaultFilter.accept(raw, mode) {
            return false;
        }
        if raw.is_dir {
            return true;
        }
        let ext = raw
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.extensions.contains(&ext)
    }
}

/// Lists `dir` through `fs`, keeping children `filter` admits under `mode`.
///
/// Children whose OS handle reports them hidden are dropped even if the
/// filter admits them; children without a resolvable handle are never
/// hidden-filtered. The result is sorted by [`sort_entries`].
///
/// # Errors
///
/// - [`CoreError::InvalidDirectory`]: `dir` is missing or not a directory.
/// - [`CoreError::PermissionDenied`]: `dir` cannot be read.
/// - [`CoreError::Io`]: any other listing failure.
pub fn list(
    fs: &dyn FileSystem,
    dir: &Path,
    filter: &dyn EntryFilter,
    mode: ChooserMode,
) -> CoreResult<Vec<Entry>> {
    if !fs.is_dir(dir) {
        return Err(CoreError::InvalidDirectory(dir.to_path_buf()));
    }

    let children = fs.list_children(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::InvalidDirectory(dir.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(dir.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let total = children.len();

    let mut entries: Vec<Entry> = children
        .iter()
        .filter(|raw| filter.accept(raw, mode))
        .filter(|raw| raw.hidden != Some(true))
        .map(Entry::from_raw)
        .collect();
    sort_entries(&mut entries);

    tracing::debug!(
        "listed {}: {} of {} children admitted",
        dir.display(),
        entries.len(),
        total
    );
    Ok(entries)
}

/// Flat alphabetical sort: case-insensitive name, then raw name, then path.
///
/// Directories and files are interleaved; the order is total and stable.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.path().cmp(b.path()))
    });
}
