//! Chooser core library: UI-agnostic file/directory chooser logic.
//!
//! `chooser-core` implements the navigation, listing, selection and
//! confirmation engine behind a file chooser. It never draws anything; a
//! front end (such as `chooser-tui`) sends [`Command`]s and renders from the
//! [`Event`]s the [`FileChooser`] emits.
//!
//! # Modules
//!
//! - [`chooser`]: [`FileChooser`], with current directory, history, listing, selection, favorites.
//! - [`confirm`]: the confirm/overwrite decision ([`ConfirmOutcome`]).
//! - [`fs`]: file-system and well-known-location collaborators, [`Entry`].
//! - [`nav`]: history, listing, selection, favorites, shortcuts and fuzzy search.
//! - [`config`]: TOML configuration.
//! - [`event`]: command and event types for UI ↔ Core communication.
//! - [`text`]: user-visible strings.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod chooser;
pub mod config;
pub mod confirm;
pub mod error;
pub mod event;
pub mod fs;
pub mod mode;
pub mod nav;
pub mod text;

pub use chooser::FileChooser;
pub use config::settings::{Config, ModifierKey};
pub use confirm::{ConfirmOutcome, OverwriteAnswer};
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::Entry;
pub use fs::places::{FixedPlaces, Place, Places, StdPlaces};
pub use fs::provider::{FileSystem, MemNode, MemoryFs, RawEntry, StdFileSystem};
pub use fs::size::format_size;
pub use mode::{ChooserMode, SelectionMode};
pub use nav::favorites::{FavoritesBackend, FavoritesStore, MemoryBackend, TomlFileBackend};
pub use nav::filter::{fuzzy_filter, FuzzyMatch};
pub use nav::history::{HistoryPolicy, HistoryStack};
pub use nav::lister::{DefaultFilter, EntryFilter, ExtensionFilter};
pub use nav::selection::{ClickOutcome, Modifiers, SelectionModel};
pub use nav::shortcuts::{Shortcut, ShortcutKind};
pub use text::ChooserText;

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which makes composed
/// characters such as Korean Hangul show up as individual Jamo. This helper
/// re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_string_composes_hangul() {
        let decomposed = "\u{1100}\u{1161}";
        assert_eq!(nfc_string(decomposed), "\u{AC00}");
    }

    #[test]
    fn nfc_string_leaves_ascii() {
        assert_eq!(nfc_string("plain.txt"), "plain.txt");
    }
}
