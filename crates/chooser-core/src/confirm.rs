//! Confirmation state machine.
//!
//! [`resolve`] turns the chooser state at the moment the user presses
//! Open/Save into a [`ConfirmOutcome`]. It never mutates anything; the
//! chooser applies the outcome (navigating, storing a pending overwrite,
//! notifying listeners).

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::fs::provider::FileSystem;
use crate::mode::{ChooserMode, SelectionMode};

/// Result of a confirm attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The chooser is done; these are the chosen paths.
    Completed(Vec<PathBuf>),
    /// A lone directory was confirmed in files mode and was entered instead.
    NavigatedInto(PathBuf),
    /// A lone file was confirmed in directories mode.
    RejectedWrongType,
    /// Nothing was selected in open mode.
    RejectedNoSelection,
    /// Save would overwrite these existing paths; ask the user first.
    PendingOverwriteConfirmation(Vec<PathBuf>),
}

impl ConfirmOutcome {
    /// Whether the chooser should close after this outcome.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// The user's answer to an overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteAnswer {
    Yes,
    No,
}

impl OverwriteAnswer {
    /// Resolves a pending overwrite. `No` yields `None`: nothing changes and
    /// the chooser stays open.
    pub fn resolve(self, pending: Vec<PathBuf>) -> Option<ConfirmOutcome> {
        match self {
            Self::Yes => Some(ConfirmOutcome::Completed(pending)),
            Self::No => None,
        }
    }
}

/// Snapshot of everything a confirm decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmRequest<'a> {
    pub selection: &'a [Entry],
    pub mode: ChooserMode,
    pub selection_mode: SelectionMode,
    pub current_dir: &'a Path,
    /// Free-text name field; only read in save mode with nothing selected.
    pub file_name: &'a str,
}

/// Decides what a confirm action means.
///
/// # Errors
///
/// [`CoreError::InvalidFilename`] when saving with an empty selection and a
/// file name that is empty or contains path syntax.
pub fn resolve(request: ConfirmRequest<'_>, fs: &dyn FileSystem) -> CoreResult<ConfirmOutcome> {
    let ConfirmRequest {
        selection,
        mode,
        selection_mode,
        current_dir,
        file_name,
    } = request;

    if let [only] = selection {
        if only.is_dir() && selection_mode == SelectionMode::Files {
            return Ok(ConfirmOutcome::NavigatedInto(only.path().to_path_buf()));
        }
        if !only.is_dir() && selection_mode == SelectionMode::Directories {
            return Ok(ConfirmOutcome::RejectedWrongType);
        }
    }

    let paths: Vec<PathBuf> = selection.iter().map(|e| e.path().to_path_buf()).collect();

    match (mode, paths.is_empty()) {
        (ChooserMode::Open, false) => Ok(ConfirmOutcome::Completed(paths)),
        (ChooserMode::Save, false) => Ok(ConfirmOutcome::PendingOverwriteConfirmation(paths)),
        (ChooserMode::Save, true) => {
            validate_file_name(file_name)?;
            let candidate = current_dir.join(file_name);
            if fs.exists(&candidate) {
                Ok(ConfirmOutcome::PendingOverwriteConfirmation(vec![candidate]))
            } else {
                Ok(ConfirmOutcome::Completed(vec![candidate]))
            }
        }
        (ChooserMode::Open, true) if selection_mode == SelectionMode::Directories => {
            Ok(ConfirmOutcome::Completed(vec![current_dir.to_path_buf()]))
        }
        (ChooserMode::Open, true) => Ok(ConfirmOutcome::RejectedNoSelection),
    }
}

/// Rejects names that cannot denote a single child of the current directory.
pub fn validate_file_name(name: &str) -> CoreResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(|c| c == '/' || c == '\\' || c == '\0');
    if invalid {
        Err(CoreError::InvalidFilename(name.to_owned()))
    } else {
        Ok(())
    }
}
