//! Chooser and selection modes.

use serde::{Deserialize, Serialize};

/// Whether the chooser opens existing files or saves a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChooserMode {
    #[default]
    Open,
    Save,
}

/// Which kinds of entries may end up in the final selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Files,
    Directories,
    FilesAndDirectories,
}

impl SelectionMode {
    /// Returns `true` if an entry of the given kind may stay selected.
    pub fn admits(self, is_dir: bool) -> bool {
        match self {
            Self::Files => !is_dir,
            Self::Directories => is_dir,
            Self::FilesAndDirectories => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_mode_admits_only_files() {
        assert!(SelectionMode::Files.admits(false));
        assert!(!SelectionMode::Files.admits(true));
    }

    #[test]
    fn directories_mode_admits_only_directories() {
        assert!(SelectionMode::Directories.admits(true));
        assert!(!SelectionMode::Directories.admits(false));
    }

    #[test]
    fn mixed_mode_admits_everything() {
        assert!(SelectionMode::FilesAndDirectories.admits(true));
        assert!(SelectionMode::FilesAndDirectories.admits(false));
    }

    #[test]
    fn modes_deserialize_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ChooserMode,
            selection: SelectionMode,
        }
        let w: Wrapper =
            toml::from_str("mode = \"save\"\nselection = \"files_and_directories\"").unwrap();
        assert_eq!(w.mode, ChooserMode::Save);
        assert_eq!(w.selection, SelectionMode::FilesAndDirectories);
    }

    #[test]
    fn defaults_are_open_and_files() {
        assert_eq!(ChooserMode::default(), ChooserMode::Open);
        assert_eq!(SelectionMode::default(), SelectionMode::Files);
    }
}
