//! Shortcut panel model: desktop, home, roots and favorites.

use std::path::{Path, PathBuf};

use crate::fs::places::{display_name, Places};
use crate::mode::ChooserMode;
use crate::text::ChooserText;

/// Where a shortcut came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutKind {
    Desktop,
    Home,
    Root,
    Favorite,
}

/// A directory offered for one-click navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    path: PathBuf,
    label: String,
    kind: ShortcutKind,
}

impl Shortcut {
    pub fn new(path: PathBuf, label: impl Into<String>, kind: ShortcutKind) -> Self {
        Self {
            path,
            label: label.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ShortcutKind {
        self.kind
    }
}

/// Roots usable in `mode`: readable ones for open, writable ones for save.
///
/// A root displayed as `/` is labelled "Computer".
pub fn root_shortcuts(places: &dyn Places, mode: ChooserMode) -> Vec<Shortcut> {
    places
        .roots()
        .into_iter()
        .filter(|root| match mode {
            ChooserMode::Open => root.readable,
            ChooserMode::Save => root.writable,
        })
        .map(|root| {
            let label = if root.label == "/" {
                ChooserText::Computer.as_str().to_string()
            } else if root.label.is_empty() {
                root.path.display().to_string()
            } else {
                root.label
            };
            Shortcut::new(root.path, label, ShortcutKind::Root)
        })
        .collect()
}

/// Full shortcut list in panel order: desktop, home, `roots`, favorites.
pub fn build_shortcuts(
    places: &dyn Places,
    roots: &[Shortcut],
    favorites: &[PathBuf],
) -> Vec<Shortcut> {
    let mut shortcuts = Vec::with_capacity(2 + roots.len() + favorites.len());

    if let Some(desktop) = places.desktop() {
        shortcuts.push(Shortcut::new(
            desktop.path,
            ChooserText::Desktop.as_str(),
            ShortcutKind::Desktop,
        ));
    }
    if let Some(home) = places.home() {
        shortcuts.push(Shortcut::new(home.path, home.label, ShortcutKind::Home));
    }
    shortcuts.extend_from_slice(roots);
    shortcuts.extend(
        favorites
            .iter()
            .map(|f| Shortcut::new(f.clone(), display_name(f), ShortcutKind::Favorite)),
    );
    shortcuts
}
