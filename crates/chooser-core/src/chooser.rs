//! The chooser engine.
//!
//! [`FileChooser`] owns the current directory, the navigation history, the
//! listing, the selection and the favorites, and reports every change to its
//! listeners as an [`Event`]. All operations are synchronous; each either
//! completes or returns an error having changed nothing.

use std::path::{Path, PathBuf};

use crate::config::settings::{default_config_dir, Config};
use crate::confirm::{self, ConfirmOutcome, ConfirmRequest, OverwriteAnswer};
use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event, Listeners};
use crate::fs::entry::Entry;
use crate::fs::places::{Places, StdPlaces};
use crate::fs::provider::{FileSystem, StdFileSystem};
use crate::mode::{ChooserMode, SelectionMode};
use crate::nav::favorites::{FavoritesStore, TomlFileBackend};
use crate::nav::history::{HistoryPolicy, HistoryStack};
use crate::nav::lister::{self, DefaultFilter, EntryFilter, ExtensionFilter};
use crate::nav::selection::{ClickOutcome, Modifiers, SelectionModel};
use crate::nav::shortcuts::{build_shortcuts, root_shortcuts, Shortcut};
use crate::text::ChooserText;

/// File/directory chooser state machine.
pub struct FileChooser<F: FileSystem = StdFileSystem> {
    fs: F,
    places: Box<dyn Places>,
    favorites: FavoritesStore,
    filter: Box<dyn EntryFilter>,
    mode: ChooserMode,
    selection_mode: SelectionMode,
    multiselection: bool,
    current: PathBuf,
    history: HistoryStack,
    listing: Vec<Entry>,
    selection: SelectionModel,
    roots: Vec<Shortcut>,
    shortcuts: Vec<Shortcut>,
    pending_overwrite: Option<Vec<PathBuf>>,
    listeners: Listeners,
}

impl<F: FileSystem> std::fmt::Debug for FileChooser<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChooser")
            .field("mode", &self.mode)
            .field("selection_mode", &self.selection_mode)
            .field("current", &self.current)
            .field("history", &self.history)
            .field("selection", &self.selection)
            .field("pending_overwrite", &self.pending_overwrite)
            .finish_non_exhaustive()
    }
}

impl FileChooser<StdFileSystem> {
    /// Builds a chooser on the real file system from `config`.
    ///
    /// Favorites live in the configured file (or `favorites.toml` in the
    /// default config directory). The start directory is the configured one,
    /// else the home directory, else the process working directory.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let places = StdPlaces;
        let start = match &config.chooser.start_dir {
            Some(dir) => dir.clone(),
            None => match places.home() {
                Some(home) => home.path,
                None => std::env::current_dir()?,
            },
        };

        let backend = TomlFileBackend::new(config.favorites_path(&default_config_dir()));
        let favorites = FavoritesStore::open(Box::new(backend), config.favorites.key.clone());

        let mut chooser = Self::new(
            StdFileSystem,
            Box::new(places),
            favorites,
            config.chooser.mode,
            &start,
        )?
        .with_selection_mode(config.chooser.selection_mode)
        .with_multiselection(config.chooser.multiselection);

        if !config.chooser.extensions.is_empty() {
            let extensions: Vec<&str> = config.chooser.extensions.iter().map(String::as_str).collect();
            chooser.set_filter(Box::new(ExtensionFilter::new(&extensions)))?;
        }
        Ok(chooser)
    }
}

impl<F: FileSystem> FileChooser<F> {
    /// Creates a chooser showing `start_dir` with empty history.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidDirectory`] if `start_dir` is not a listable
    /// directory.
    pub fn new(
        fs: F,
        places: Box<dyn Places>,
        favorites: FavoritesStore,
        mode: ChooserMode,
        start_dir: &Path,
    ) -> CoreResult<Self> {
        let current = resolve_dir(&fs, start_dir)?;
        let filter: Box<dyn EntryFilter> = Box::new(DefaultFilter);
        let listing = lister::list(&fs, &current, filter.as_ref(), mode)?;
        let roots = root_shortcuts(places.as_ref(), mode);
        let shortcuts = build_shortcuts(places.as_ref(), &roots, favorites.list());

        tracing::debug!("chooser opened at {}", current.display());
        Ok(Self {
            fs,
            places,
            favorites,
            filter,
            mode,
            selection_mode: SelectionMode::default(),
            multiselection: false,
            current,
            history: HistoryStack::new(),
            listing,
            selection: SelectionModel::new(),
            roots,
            shortcuts,
            pending_overwrite: None,
            listeners: Listeners::new(),
        })
    }

    #[must_use]
    pub fn with_selection_mode(mut self, selection_mode: SelectionMode) -> Self {
        self.selection_mode = selection_mode;
        self
    }

    #[must_use]
    pub fn with_multiselection(mut self, enabled: bool) -> Self {
        self.multiselection = enabled;
        self
    }

    /// Registers a callback for every subsequent [`Event`].
    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) {
        self.listeners.subscribe(listener);
    }

    // --- accessors ---

    pub fn current_dir(&self) -> &Path {
        &self.current
    }

    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn favorites(&self) -> &[PathBuf] {
        self.favorites.list()
    }

    pub fn mode(&self) -> ChooserMode {
        self.mode
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub fn multiselection_enabled(&self) -> bool {
        self.multiselection
    }

    /// Paths awaiting an overwrite answer, if a save is pending.
    pub fn pending_overwrite(&self) -> Option<&[PathBuf]> {
        self.pending_overwrite.as_deref()
    }

    /// Window title for the current selection mode.
    pub fn title(&self) -> &'static str {
        self.title_text().as_str()
    }

    pub fn title_text(&self) -> ChooserText {
        match self.selection_mode {
            SelectionMode::Files => ChooserText::TitleChooseFiles,
            SelectionMode::Directories => ChooserText::TitleChooseDirectories,
            SelectionMode::FilesAndDirectories => ChooserText::TitleChooseFilesAndDirectories,
        }
    }

    /// Label of the confirm button.
    pub fn confirm_label(&self) -> ChooserText {
        match self.mode {
            ChooserMode::Open => ChooserText::Open,
            ChooserMode::Save => ChooserText::Save,
        }
    }

    /// Summary of the selection for the file-name field.
    pub fn file_name_text(&self) -> String {
        self.selection.summary_text()
    }

    // --- navigation ---

    /// Switches to `dir`.
    ///
    /// Navigating to the current directory is a no-op. The target is
    /// validated and listed before anything changes.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidDirectory`] if `dir` is missing or not a directory.
    pub fn navigate_to(&mut self, dir: &Path, policy: HistoryPolicy) -> CoreResult<()> {
        if dir == self.current {
            return Ok(());
        }
        let target = resolve_dir(&self.fs, dir)?;
        if target == self.current {
            return Ok(());
        }

        let history = match policy {
            HistoryPolicy::AddToHistory => self.history.push(self.current.clone()),
            HistoryPolicy::ReplaceHistory => HistoryStack::new(),
            HistoryPolicy::ReplayHistory => self.history.clone(),
        };
        self.switch_to(target, history)
    }

    /// Programmatic jump that starts a fresh history.
    pub fn set_directory(&mut self, dir: &Path) -> CoreResult<()> {
        self.navigate_to(dir, HistoryPolicy::ReplaceHistory)
    }

    /// # Errors
    ///
    /// [`CoreError::NoHistory`] when the back stack is empty.
    pub fn go_back(&mut self) -> CoreResult<()> {
        let (history, target) = self
            .history
            .go_back(&self.current)
            .ok_or(CoreError::NoHistory)?;
        self.switch_to(target, history)
    }

    /// # Errors
    ///
    /// [`CoreError::NoHistory`] when the forward stack is empty.
    pub fn go_forward(&mut self) -> CoreResult<()> {
        let (history, target) = self
            .history
            .go_forward(&self.current)
            .ok_or(CoreError::NoHistory)?;
        self.switch_to(target, history)
    }

    /// Moves to the parent directory. Does nothing at a root, including
    /// Windows drive roots.
    pub fn go_parent(&mut self) -> CoreResult<()> {
        if is_drive_root(&self.current) {
            return Ok(());
        }
        match self.fs.parent(&self.current) {
            Some(parent) => self.navigate_to(&parent, HistoryPolicy::AddToHistory),
            None => Ok(()),
        }
    }

    /// Navigates to a path typed by the user. Relative paths resolve against
    /// the current directory.
    pub fn navigate_to_typed_path(&mut self, text: &str) -> CoreResult<()> {
        let typed = PathBuf::from(text.trim());
        let target = if typed.is_absolute() {
            typed
        } else {
            self.current.join(typed)
        };
        if !self.fs.exists(&target) {
            return Err(CoreError::InvalidDirectory(target));
        }
        self.navigate_to(&target, HistoryPolicy::ReplaceHistory)
    }

    /// Rebuilds the shortcut panel (including roots) and re-lists the
    /// current directory. History is untouched.
    pub fn refresh(&mut self) -> CoreResult<()> {
        self.roots = root_shortcuts(self.places.as_ref(), self.mode);
        self.rebuild_shortcuts();
        let listing = lister::list(&self.fs, &self.current, self.filter.as_ref(), self.mode)?;
        self.commit_listing(listing);
        Ok(())
    }

    /// Replaces the listing predicate and re-lists.
    pub fn set_filter(&mut self, filter: Box<dyn EntryFilter>) -> CoreResult<()> {
        let listing = lister::list(&self.fs, &self.current, filter.as_ref(), self.mode)?;
        self.filter = filter;
        self.commit_listing(listing);
        Ok(())
    }

    /// Switches between open and save. Roots and the listing's permission
    /// gate follow the new mode; an installed filter is kept.
    pub fn set_mode(&mut self, mode: ChooserMode) -> CoreResult<()> {
        if mode == self.mode {
            return Ok(());
        }
        let listing = lister::list(&self.fs, &self.current, self.filter.as_ref(), mode)?;

        self.mode = mode;
        self.roots = root_shortcuts(self.places.as_ref(), mode);
        self.rebuild_shortcuts();
        self.commit_listing(listing);
        Ok(())
    }

    /// Changes the selection mode, revalidates the selection and retitles.
    pub fn set_selection_mode(&mut self, selection_mode: SelectionMode) {
        self.selection_mode = selection_mode;
        let dropped = self.selection.revalidate(selection_mode);
        let title = self.title().to_string();
        self.listeners.emit(&Event::TitleChanged(title));
        if !dropped.is_empty() {
            tracing::debug!("selection mode change dropped {} entries", dropped.len());
            self.emit_selection();
        }
    }

    pub fn set_multiselection_enabled(&mut self, enabled: bool) {
        self.multiselection = enabled;
    }

    // --- selection ---

    /// Click on a listed entry.
    pub fn click(&mut self, entry: &Entry, modifiers: Modifiers) -> ClickOutcome {
        let outcome = self.selection.click(
            entry,
            &self.listing,
            modifiers,
            self.multiselection,
            self.selection_mode,
        );
        tracing::debug!("click on {}: {:?}", entry.name(), outcome);
        self.emit_selection();
        outcome
    }

    /// Selects every listed entry, then revalidates.
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.listing);
        self.selection.revalidate(self.selection_mode);
        self.emit_selection();
    }

    /// The user typed a file name; any file selection is dropped.
    pub fn file_name_typed(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.emit_selection();
    }

    /// Double click on a listed entry: directories are entered, a selected
    /// file confirms.
    pub fn activate(&mut self, entry: &Entry) -> CoreResult<Option<ConfirmOutcome>> {
        if entry.is_dir() {
            self.navigate_to(entry.path(), HistoryPolicy::AddToHistory)?;
            return Ok(None);
        }
        if !self.selection.contains(entry.path()) {
            return Ok(None);
        }
        self.confirm("").map(Some)
    }

    // --- shortcuts and favorites ---

    /// Puts the shortcut at `index` in the shortcut slot. Returns `false` for
    /// an out-of-range index.
    pub fn select_shortcut(&mut self, index: usize) -> bool {
        let Some(shortcut) = self.shortcuts.get(index).cloned() else {
            return false;
        };
        self.selection.select_shortcut(shortcut);
        self.emit_selection();
        true
    }

    /// Navigates to the shortcut at `index`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidDirectory`] when the shortcut target is gone.
    pub fn activate_shortcut(&mut self, index: usize) -> CoreResult<()> {
        let Some(path) = self.shortcuts.get(index).map(|s| s.path().to_path_buf()) else {
            return Ok(());
        };
        if !self.fs.exists(&path) {
            return Err(CoreError::InvalidDirectory(path));
        }
        if self.fs.is_dir(&path) {
            self.navigate_to(&path, HistoryPolicy::AddToHistory)?;
        }
        Ok(())
    }

    pub fn add_favorite(&mut self, dir: &Path) {
        let dir = self.favorite_path(dir);
        self.favorites.add(dir);
        self.rebuild_shortcuts();
    }

    /// Removes the first favorite that resolves to the same directory as
    /// `dir`; `false` if none matched.
    pub fn remove_favorite(&mut self, dir: &Path) -> bool {
        let dir = self.favorite_path(dir);
        let fs = &self.fs;
        let removed = self
            .favorites
            .remove_where(|stored| canonical_or_raw(fs, stored) == dir);
        self.rebuild_shortcuts();
        removed
    }

    pub fn is_favorite(&self, dir: &Path) -> bool {
        let dir = self.favorite_path(dir);
        self.favorites
            .contains_where(|stored| canonical_or_raw(&self.fs, stored) == dir)
    }

    // --- confirmation ---

    /// Resolves a press of the confirm button.
    ///
    /// `file_name` is the free-text field, read only when saving with nothing
    /// selected. A lone directory in files mode is entered.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidFilename`] for an unusable save name.
    /// - [`CoreError::InvalidDirectory`] if entering the directory fails.
    pub fn confirm(&mut self, file_name: &str) -> CoreResult<ConfirmOutcome> {
        let selection = self.selection.entries();
        let outcome = confirm::resolve(
            ConfirmRequest {
                selection: &selection,
                mode: self.mode,
                selection_mode: self.selection_mode,
                current_dir: &self.current,
                file_name,
            },
            &self.fs,
        )?;

        match &outcome {
            ConfirmOutcome::NavigatedInto(dir) => {
                let dir = dir.clone();
                self.navigate_to(&dir, HistoryPolicy::AddToHistory)?;
            }
            ConfirmOutcome::PendingOverwriteConfirmation(paths) => {
                self.pending_overwrite = Some(paths.clone());
            }
            _ => {}
        }

        tracing::info!("confirm resolved: {:?}", outcome);
        self.listeners.emit(&Event::Confirmed(outcome.clone()));
        Ok(outcome)
    }

    /// Answers a pending overwrite prompt. `Yes` completes; `No` leaves the
    /// chooser open with its selection intact. Returns `None` when nothing
    /// completed.
    pub fn answer_overwrite(&mut self, answer: OverwriteAnswer) -> Option<ConfirmOutcome> {
        let pending = self.pending_overwrite.take()?;
        let outcome = answer.resolve(pending)?;
        tracing::info!("overwrite accepted: {:?}", outcome);
        self.listeners.emit(&Event::Confirmed(outcome.clone()));
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        self.pending_overwrite = None;
        tracing::info!("chooser cancelled");
        self.listeners.emit(&Event::Cancelled);
    }

    /// The chooser became visible again: forget the previous selection.
    pub fn on_shown(&mut self) {
        self.pending_overwrite = None;
        self.selection.clear();
        self.emit_selection();
    }

    // --- commands ---

    /// Applies a front-end [`Command`].
    pub fn dispatch(&mut self, command: Command) -> CoreResult<()> {
        match command {
            Command::Navigate(dir) => self.navigate_to(&dir, HistoryPolicy::AddToHistory),
            Command::NavigateTyped(text) => self.navigate_to_typed_path(&text),
            Command::GoBack => self.go_back(),
            Command::GoForward => self.go_forward(),
            Command::GoParent => self.go_parent(),
            Command::Refresh => self.refresh(),
            Command::Click(path, modifiers) => {
                let entry = self.listed(&path)?;
                self.click(&entry, modifiers);
                Ok(())
            }
            Command::Activate(path) => {
                let entry = self.listed(&path)?;
                self.activate(&entry).map(|_| ())
            }
            Command::SelectAll => {
                self.select_all();
                Ok(())
            }
            Command::FileNameTyped => {
                self.file_name_typed();
                Ok(())
            }
            Command::SelectShortcut(index) => {
                self.select_shortcut(index);
                Ok(())
            }
            Command::ActivateShortcut(index) => self.activate_shortcut(index),
            Command::AddFavorite(dir) => {
                self.add_favorite(&dir);
                Ok(())
            }
            Command::RemoveFavorite(dir) => {
                self.remove_favorite(&dir);
                Ok(())
            }
            Command::SetSelectionMode(mode) => {
                self.set_selection_mode(mode);
                Ok(())
            }
            Command::SetMultiselection(enabled) => {
                self.set_multiselection_enabled(enabled);
                Ok(())
            }
            Command::Confirm(file_name) => self.confirm(&file_name).map(|_| ()),
            Command::AnswerOverwrite(answer) => {
                self.answer_overwrite(answer);
                Ok(())
            }
            Command::Cancel => {
                self.cancel();
                Ok(())
            }
            Command::Shown => {
                self.on_shown();
                Ok(())
            }
        }
    }

    // --- internals ---

    fn listed(&self, path: &Path) -> CoreResult<Entry> {
        self.listing
            .iter()
            .find(|e| e.path() == path)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(path.to_path_buf()))
    }

    fn switch_to(&mut self, target: PathBuf, history: HistoryStack) -> CoreResult<()> {
        let listing = lister::list(&self.fs, &target, self.filter.as_ref(), self.mode)?;
        tracing::debug!("navigated to {}", target.display());

        self.current = target;
        self.history = history;
        self.listeners.emit(&Event::HistoryAvailabilityChanged {
            back: self.history.can_go_back(),
            forward: self.history.can_go_forward(),
        });
        self.commit_listing(listing);
        Ok(())
    }

    fn commit_listing(&mut self, listing: Vec<Entry>) {
        self.listing = listing;
        self.selection.clear();
        self.pending_overwrite = None;
        self.listeners.emit(&Event::DirectoryChanged {
            dir: self.current.clone(),
            listing: self.listing.clone(),
        });
        self.emit_selection();
    }

    fn rebuild_shortcuts(&mut self) {
        self.shortcuts = build_shortcuts(self.places.as_ref(), &self.roots, self.favorites.list());
        let stale = self
            .selection
            .selected_shortcut()
            .is_some_and(|s| !self.shortcuts.contains(s));
        self.listeners
            .emit(&Event::ShortcutsChanged(self.shortcuts.clone()));
        if stale {
            self.selection.clear_shortcut();
            self.emit_selection();
        }
    }

    fn emit_selection(&mut self) {
        let event = Event::SelectionChanged {
            selection: self.selection.entries(),
            text: self.selection.summary_text(),
            shortcut: self.selection.selected_shortcut().cloned(),
        };
        self.listeners.emit(&event);
    }

    fn favorite_path(&self, dir: &Path) -> PathBuf {
        canonical_or_raw(&self.fs, dir)
    }
}

fn canonical_or_raw(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    fs.canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn resolve_dir(fs: &dyn FileSystem, dir: &Path) -> CoreResult<PathBuf> {
    let canonical = fs
        .canonicalize(dir)
        .map_err(|_| CoreError::InvalidDirectory(dir.to_path_buf()))?;
    if fs.is_dir(&canonical) {
        Ok(canonical)
    } else {
        Err(CoreError::InvalidDirectory(dir.to_path_buf()))
    }
}

/// `C:\` or `C:/`.
fn is_drive_root(path: &Path) -> bool {
    let s = path.to_string_lossy();
    s.len() == 3 && s.as_bytes()[1] == b':' && (s.ends_with('\\') || s.ends_with('/'))
}
