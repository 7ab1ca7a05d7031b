//! Favorite directories, persisted across sessions.
//!
//! [`FavoritesStore`] keeps an in-memory copy of the list and writes it
//! through to a [`FavoritesBackend`] on every change. Backend failures are
//! logged and never surface to the caller: the cached list stays
//! authoritative until the next successful write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Storage for named, ordered lists of path strings.
pub trait FavoritesBackend {
    /// Reads the list stored under `key`; a missing key is an empty list.
    fn read_list(&self, key: &str) -> CoreResult<Vec<String>>;
    /// Replaces the list stored under `key`.
    fn write_list(&mut self, key: &str, list: &[String]) -> CoreResult<()>;
}

/// On-disk layout: one array of path strings per key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct FavoritesFile {
    #[serde(flatten)]
    lists: BTreeMap<String, Vec<String>>,
}

/// TOML file backend. Several chooser instances may share one file under
/// different keys.
#[derive(Debug, Clone)]
pub struct TomlFileBackend {
    path: PathBuf,
}

impl TomlFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> CoreResult<FavoritesFile> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(FavoritesFile::default())
            }
            Err(e) => return Err(CoreError::Persistence(e.to_string())),
        };
        toml::from_str(&content).map_err(|e| CoreError::Persistence(e.to_string()))
    }
}

impl FavoritesBackend for TomlFileBackend {
    fn read_list(&self, key: &str) -> CoreResult<Vec<String>> {
        Ok(self.read_file()?.lists.remove(key).unwrap_or_default())
    }

    /// Creates parent directories if they don't exist. Lists stored under
    /// other keys are preserved.
    fn write_list(&mut self, key: &str, list: &[String]) -> CoreResult<()> {
        let mut file = self.read_file()?;
        file.lists.insert(key.to_owned(), list.to_vec());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::Persistence(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(&file).map_err(|e| CoreError::Persistence(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| CoreError::Persistence(e.to_string()))
    }
}

/// Volatile backend for tests and embedders without a writable config dir.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    lists: BTreeMap<String, Vec<String>>,
    failing: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every read and write fails.
    pub fn failing() -> Self {
        Self {
            lists: BTreeMap::new(),
            failing: true,
        }
    }

    #[must_use]
    pub fn with_list(mut self, key: impl Into<String>, list: &[&str]) -> Self {
        self.lists
            .insert(key.into(), list.iter().map(|s| (*s).to_owned()).collect());
        self
    }
}

impl FavoritesBackend for MemoryBackend {
    fn read_list(&self, key: &str) -> CoreResult<Vec<String>> {
        if self.failing {
            return Err(CoreError::Persistence("memory backend unavailable".into()));
        }
        Ok(self.lists.get(key).cloned().unwrap_or_default())
    }

    fn write_list(&mut self, key: &str, list: &[String]) -> CoreResult<()> {
        if self.failing {
            return Err(CoreError::Persistence("memory backend unavailable".into()));
        }
        self.lists.insert(key.to_owned(), list.to_vec());
        Ok(())
    }
}

/// Cached, write-through favorites list for one persistence key.
pub struct FavoritesStore {
    backend: Box<dyn FavoritesBackend>,
    key: String,
    cached: Vec<PathBuf>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("cached", &self.cached)
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// Opens the store and loads the list stored under `key`.
    pub fn open(backend: Box<dyn FavoritesBackend>, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            cached: Vec::new(),
        };
        store.load();
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Re-reads the persisted list. On failure the cached list is kept.
    pub fn load(&mut self) -> Vec<PathBuf> {
        match self.backend.read_list(&self.key) {
            Ok(list) => self.cached = list.into_iter().map(PathBuf::from).collect(),
            Err(e) => tracing::warn!("failed to load favorites '{}': {e}", self.key),
        }
        self.cached.clone()
    }

    /// Replaces the list and persists it.
    pub fn save(&mut self, list: Vec<PathBuf>) {
        self.cached = list;
        self.persist();
    }

    /// Appends `dir` (duplicates allowed) and persists.
    pub fn add(&mut self, dir: PathBuf) {
        tracing::debug!("adding favorite {}", dir.display());
        self.cached.push(dir);
        self.persist();
    }

    /// Removes the first entry equal to `dir`. Persists whether or not
    /// anything was removed.
    pub fn remove(&mut self, dir: &Path) -> bool {
        self.remove_where(|p| p == dir)
    }

    /// Removes the first entry for which `same` holds. Persists whether or
    /// not anything was removed.
    pub fn remove_where(&mut self, mut same: impl FnMut(&Path) -> bool) -> bool {
        let removed = match self.cached.iter().position(|p| same(p)) {
            Some(index) => {
                self.cached.remove(index);
                true
            }
            None => false,
        };
        self.persist();
        removed
    }

    pub fn list(&self) -> &[PathBuf] {
        &self.cached
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.contains_where(|p| p == dir)
    }

    pub fn contains_where(&self, mut same: impl FnMut(&Path) -> bool) -> bool {
        self.cached.iter().any(|p| same(p))
    }

    fn persist(&mut self) {
        let list: Vec<String> = self
            .cached
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        if let Err(e) = self.backend.write_list(&self.key, &list) {
            tracing::warn!("failed to save favorites '{}': {e}", self.key);
        }
    }
}
