//! Event system for communication between a front end and the chooser.
//!
//! The front end translates user input into [`Command`]s and feeds them to
//! [`FileChooser::dispatch`](crate::chooser::FileChooser::dispatch). The
//! chooser reports every state change back as an [`Event`] delivered to the
//! callbacks registered in its [`Listeners`]. The core never draws anything.

use std::path::PathBuf;

use crate::confirm::{ConfirmOutcome, OverwriteAnswer};
use crate::fs::entry::Entry;
use crate::mode::SelectionMode;
use crate::nav::selection::Modifiers;
use crate::nav::shortcuts::Shortcut;

/// An action the front end requests the chooser to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a directory, recording the current one in history.
    Navigate(PathBuf),
    /// Navigate to a path typed into the path field.
    NavigateTyped(String),
    GoBack,
    GoForward,
    GoParent,
    /// Rebuild shortcuts and re-list the current directory.
    Refresh,
    /// Click on the listed entry at this path.
    Click(PathBuf, Modifiers),
    /// Double click on the listed entry at this path.
    Activate(PathBuf),
    SelectAll,
    /// The user typed into the file-name field.
    FileNameTyped,
    SelectShortcut(usize),
    ActivateShortcut(usize),
    AddFavorite(PathBuf),
    RemoveFavorite(PathBuf),
    SetSelectionMode(SelectionMode),
    SetMultiselection(bool),
    /// Press Open/Save with the current file-name field text.
    Confirm(String),
    AnswerOverwrite(OverwriteAnswer),
    Cancel,
    /// The chooser became visible again.
    Shown,
}

/// A notification the chooser sends back to the front end.
///
/// Events flow **Core → UI**. The UI uses these to update its display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A navigation or re-listing succeeded. The file-name field should be
    /// cleared.
    DirectoryChanged {
        /// Canonical path of the new current directory.
        dir: PathBuf,
        /// The new listing, sorted.
        listing: Vec<Entry>,
    },
    /// Back/forward availability after a navigation or history change.
    HistoryAvailabilityChanged { back: bool, forward: bool },
    /// The selection changed (including revalidation drops).
    SelectionChanged {
        /// Selected entries in selection order.
        selection: Vec<Entry>,
        /// Summary for the file-name field.
        text: String,
        /// Currently selected shortcut, if any.
        shortcut: Option<Shortcut>,
    },
    /// A confirm attempt resolved.
    Confirmed(ConfirmOutcome),
    /// The user aborted.
    Cancelled,
    /// The window title changed after a selection mode change.
    TitleChanged(String),
    /// The shortcut panel must be redrawn.
    ShortcutsChanged(Vec<Shortcut>),
}

type Listener = Box<dyn FnMut(&Event)>;

/// Registered event callbacks, invoked in subscription order.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &Event) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
