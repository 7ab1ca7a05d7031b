//! Multi-selection state machine.
//!
//! [`SelectionModel`] keeps the selected entries as an ordered selection log
//! (oldest first). The log order drives the file-name summary text and picks
//! the anchor for range ("group") selection: the anchor is always the item
//! selected immediately before the range gesture's endpoint.
//!
//! Mode constraints are enforced after the fact by [`SelectionModel::revalidate`],
//! never by refusing a click.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::fs::entry::Entry;
use crate::mode::SelectionMode;
use crate::nav::shortcuts::Shortcut;

/// Modifier keys held during a click, already resolved from the caller's
/// key configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// The multiselect (toggle) key.
    pub multi: bool,
    /// The group (range) multiselect key.
    pub group: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        multi: false,
        group: false,
    };
    pub const MULTI: Self = Self {
        multi: true,
        group: false,
    };
    pub const GROUP: Self = Self {
        multi: false,
        group: true,
    };
}

/// Result of a selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked entry is now selected.
    Selected,
    /// The click removed the entry from the selection. Callers should not
    /// treat a following second click as a double-click activation.
    ToggledOff,
}

/// Selected entries plus the independent shortcut slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    log: IndexMap<PathBuf, Entry>,
    shortcut: Option<Shortcut>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.log.values()
    }

    /// Selected entries in selection order, cloned.
    pub fn entries(&self) -> Vec<Entry> {
        self.log.values().cloned().collect()
    }

    /// Selected paths in selection order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.log.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.log.contains_key(path)
    }

    /// The only selected entry, if exactly one is selected.
    pub fn single(&self) -> Option<&Entry> {
        if self.log.len() == 1 {
            self.log.values().next()
        } else {
            None
        }
    }

    /// Plain selection: clears everything, then selects `entry`.
    ///
    /// Re-selecting the sole selected entry deselects it instead.
    pub fn select_single(&mut self, entry: &Entry) -> ClickOutcome {
        let was_sole = self.single().is_some_and(|e| e.path() == entry.path());
        self.log.clear();
        if was_sole {
            return ClickOutcome::ToggledOff;
        }
        self.log.insert(entry.path().to_path_buf(), entry.clone());
        ClickOutcome::Selected
    }

    /// Adds `entry` if absent, removes it if present. Other items stay.
    pub fn select_toggle(&mut self, entry: &Entry) -> ClickOutcome {
        if self.log.shift_remove(entry.path()).is_some() {
            ClickOutcome::ToggledOff
        } else {
            self.log.insert(entry.path().to_path_buf(), entry.clone());
            ClickOutcome::Selected
        }
    }

    /// Range selection ending at `entry`.
    ///
    /// `entry` becomes the latest item of the log; the anchor is the item
    /// selected just before it (or `entry` itself when nothing else is
    /// selected). Every listing entry between the two indices, inclusive, is
    /// added in listing order. Endpoints missing from `listing` make the range
    /// a no-op beyond selecting `entry`.
    pub fn select_range(&mut self, entry: &Entry, listing: &[Entry]) {
        self.log.shift_remove(entry.path());
        self.log.insert(entry.path().to_path_buf(), entry.clone());

        let anchor = match self.log.len() {
            0 | 1 => entry.path().to_path_buf(),
            n => match self.log.get_index(n - 2) {
                Some((path, _)) => path.clone(),
                None => return,
            },
        };
        self.fill_span(&anchor, entry.path(), listing, None);
    }

    /// Range step after a group click deselected `entry`.
    ///
    /// The anchor is the second-newest remaining item. The span between it
    /// and `entry` is added, but `entry` itself stays deselected.
    fn extend_after_toggle_off(&mut self, entry: &Entry, listing: &[Entry]) {
        let n = self.log.len();
        if n < 2 {
            return;
        }
        let Some((anchor, _)) = self.log.get_index(n - 2) else {
            return;
        };
        let anchor = anchor.clone();
        self.fill_span(&anchor, entry.path(), listing, Some(entry.path()));
    }

    /// Adds every listing entry between `from` and `to` inclusive, in listing
    /// order, except `skip`. No-op when either endpoint is not listed.
    fn fill_span(&mut self, from: &Path, to: &Path, listing: &[Entry], skip: Option<&Path>) {
        let position = |path: &Path| listing.iter().position(|e| e.path() == path);
        let (Some(start), Some(end)) = (position(from), position(to)) else {
            return;
        };
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };

        for item in &listing[lo..=hi] {
            if Some(item.path()) == skip {
                continue;
            }
            if !self.log.contains_key(item.path()) {
                self.log.insert(item.path().to_path_buf(), item.clone());
            }
        }
    }

    /// Selects every entry of `listing` without toggling any off.
    pub fn select_all(&mut self, listing: &[Entry]) {
        for item in listing {
            if !self.log.contains_key(item.path()) {
                self.log.insert(item.path().to_path_buf(), item.clone());
            }
        }
    }

    /// Drops entries that `mode` does not admit, when more than one item is
    /// selected. Returns the dropped entries.
    ///
    /// A single selection is left alone; the confirmation step decides what a
    /// lone wrong-type item means.
    pub fn revalidate(&mut self, mode: SelectionMode) -> Vec<Entry> {
        if self.log.len() <= 1 {
            return Vec::new();
        }
        let mut dropped = Vec::new();
        self.log.retain(|_, entry| {
            let keep = mode.admits(entry.is_dir());
            if !keep {
                dropped.push(entry.clone());
            }
            keep
        });
        dropped
    }

    /// Full click gesture.
    ///
    /// Clears the shortcut slot. Without multiselection, or without a
    /// modifier held, this is [`select_single`](Self::select_single). With
    /// the multiselect key it toggles; with the group key it toggles and then
    /// extends a range from the anchor. Finishes with a revalidation pass.
    pub fn click(
        &mut self,
        entry: &Entry,
        listing: &[Entry],
        modifiers: Modifiers,
        multiselection: bool,
        mode: SelectionMode,
    ) -> ClickOutcome {
        self.shortcut = None;

        let outcome = if !multiselection || (!modifiers.multi && !modifiers.group) {
            self.select_single(entry)
        } else {
            let outcome = self.select_toggle(entry);
            if modifiers.group && self.log.len() > 1 {
                match outcome {
                    ClickOutcome::Selected => self.select_range(entry, listing),
                    ClickOutcome::ToggledOff => self.extend_after_toggle_off(entry, listing),
                }
            }
            outcome
        };

        self.revalidate(mode);
        outcome
    }

    /// Empties the file selection. The shortcut slot is untouched.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Text for the file-name field: empty, the sole name, or every name
    /// quoted and followed by a space.
    pub fn summary_text(&self) -> String {
        match self.log.len() {
            0 => String::new(),
            1 => self
                .log
                .values()
                .next()
                .map(|e| e.name().to_string())
                .unwrap_or_default(),
            _ => self
                .log
                .values()
                .map(|e| format!("\"{}\" ", e.name()))
                .collect(),
        }
    }

    /// Selects a shortcut, replacing any previous one and clearing the
    /// file selection.
    pub fn select_shortcut(&mut self, shortcut: Shortcut) {
        self.log.clear();
        self.shortcut = Some(shortcut);
    }

    pub fn selected_shortcut(&self) -> Option<&Shortcut> {
        self.shortcut.as_ref()
    }

    pub fn clear_shortcut(&mut self) {
        self.shortcut = None;
    }
}
