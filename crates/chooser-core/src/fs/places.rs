//! Well-known locations collaborator.
//!
//! The chooser treats home, desktop and file-system roots as opaque input
//! supplied by a [`Places`] implementation. [`StdPlaces`] derives them from
//! environment variables and the real disk; tests use [`FixedPlaces`].

use std::path::{Path, PathBuf};

use crate::fs::provider::{FileSystem, StdFileSystem};

/// A well-known location with its display name and capability flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub path: PathBuf,
    pub label: String,
    pub readable: bool,
    pub writable: bool,
}

impl Place {
    /// Builds a place, probing `fs` for read/write capability.
    pub fn inspect(fs: &dyn FileSystem, path: PathBuf, label: impl Into<String>) -> Self {
        Self {
            readable: fs.can_read(&path),
            writable: fs.can_write(&path),
            label: label.into(),
            path,
        }
    }
}

/// Provider of well-known locations.
pub trait Places {
    /// The user's home directory.
    fn home(&self) -> Option<Place>;
    /// The user's desktop directory.
    fn desktop(&self) -> Option<Place>;
    /// File-system roots (`/` on unix, drive roots on Windows).
    fn roots(&self) -> Vec<Place>;
}

/// Environment-based locations for the local machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPlaces;

impl StdPlaces {
    fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
    }

    fn user_name() -> Option<String> {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
    }
}

impl Places for StdPlaces {
    fn home(&self) -> Option<Place> {
        let home = Self::home_dir()?;
        let label = Self::user_name().unwrap_or_else(|| display_name(&home));
        Some(Place::inspect(&StdFileSystem, home, label))
    }

    fn desktop(&self) -> Option<Place> {
        let home = Self::home_dir()?;
        let desktop = home.join("Desktop");
        let path = if desktop.is_dir() { desktop } else { home };
        let label = display_name(&path);
        Some(Place::inspect(&StdFileSystem, path, label))
    }

    #[cfg(windows)]
    fn roots(&self) -> Vec<Place> {
        (b'A'..=b'Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
            .filter(|p| p.exists())
            .map(|p| {
                let label = p.display().to_string();
                Place::inspect(&StdFileSystem, p, label)
            })
            .collect()
    }

    #[cfg(not(windows))]
    fn roots(&self) -> Vec<Place> {
        vec![Place::inspect(&StdFileSystem, PathBuf::from("/"), "/")]
    }
}

/// Static locations, used by tests and embedders that manage their own list.
#[derive(Debug, Clone, Default)]
pub struct FixedPlaces {
    pub home: Option<Place>,
    pub desktop: Option<Place>,
    pub roots: Vec<Place>,
}

impl Places for FixedPlaces {
    fn home(&self) -> Option<Place> {
        self.home.clone()
    }

    fn desktop(&self) -> Option<Place> {
        self.desktop.clone()
    }

    fn roots(&self) -> Vec<Place> {
        self.roots.clone()
    }
}

/// Last path component, or the whole path for roots.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
