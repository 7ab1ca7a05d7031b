//! Front-end state wrapped around a [`FileChooser`].
//!
//! [`App`] owns the chooser, turns [`InputAction`]s into core [`Command`]s,
//! and keeps the display state (cursor, focus, the file-name field, open
//! dialogs) in sync from the [`Event`]s the chooser emits.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use chooser_core::config::settings::KeysConfig;
use chooser_core::{
    fuzzy_filter, ChooserText, Command, ConfirmOutcome, CoreError, Entry, Event, FileChooser,
    FileSystem, FuzzyMatch, Modifiers, SelectionMode, Shortcut, ShortcutKind, StdFileSystem,
};

use crate::input::InputAction;
use crate::theme::Theme;

/// Which popup or input line currently owns the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Editing the file-name field.
    FileName(String),
    /// Typing a directory to jump to.
    PathInput(String),
    Search { query: String, selected: usize },
    /// Waiting for a yes/no answer before overwriting these paths.
    Overwrite(Vec<PathBuf>),
    Message(ChooserText),
    Help,
}

/// Which panel the cursor keys move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Files,
    Shortcuts,
}

/// How the dialog ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    Chosen(Vec<PathBuf>),
    Cancelled,
}

pub struct App<F: FileSystem = StdFileSystem> {
    chooser: FileChooser<F>,
    events: Receiver<Event>,
    mode: AppMode,
    focus: Focus,
    cursor: usize,
    shortcut_cursor: usize,
    shown_dir: PathBuf,
    file_name: String,
    title: String,
    can_go_back: bool,
    can_go_forward: bool,
    status_message: Option<String>,
    finished: Option<Finish>,
    keys: KeysConfig,
    theme: Theme,
}

impl<F: FileSystem> App<F> {
    pub fn new(mut chooser: FileChooser<F>, keys: KeysConfig, theme: Theme) -> Self {
        let (tx, rx) = mpsc::channel();
        chooser.subscribe(move |event| {
            let _ = tx.send(event.clone());
        });

        Self {
            events: rx,
            mode: AppMode::Normal,
            focus: Focus::Files,
            cursor: 0,
            shortcut_cursor: 0,
            shown_dir: chooser.current_dir().to_path_buf(),
            file_name: chooser.file_name_text(),
            title: chooser.title().to_string(),
            can_go_back: chooser.can_go_back(),
            can_go_forward: chooser.can_go_forward(),
            status_message: None,
            finished: None,
            keys,
            theme,
            chooser,
        }
    }

    // --- accessors ---

    pub fn chooser(&self) -> &FileChooser<F> {
        &self.chooser
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn shortcut_cursor(&self) -> usize {
        self.shortcut_cursor
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn finished(&self) -> Option<&Finish> {
        self.finished.as_ref()
    }

    pub fn keys(&self) -> &KeysConfig {
        &self.keys
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn cursor_entry(&self) -> Option<&Entry> {
        self.chooser.listing().get(self.cursor)
    }

    pub fn cursor_shortcut(&self) -> Option<&Shortcut> {
        self.chooser.shortcuts().get(self.shortcut_cursor)
    }

    /// Fuzzy matches of `query` against the current listing.
    pub fn search_matches(&self, query: &str) -> Vec<FuzzyMatch> {
        fuzzy_filter(self.chooser.listing(), query)
    }

    // --- input ---

    /// Applies one key action, then folds in the events it caused.
    pub fn apply(&mut self, action: InputAction) {
        self.status_message = None;

        match action {
            InputAction::Command(command) => self.dispatch(command),
            InputAction::EnterMode(mode) => self.enter_mode(mode),
            InputAction::Quit => self.dispatch(Command::Cancel),
            InputAction::CursorDown => self.move_cursor(1),
            InputAction::CursorUp => self.move_cursor(-1),
            InputAction::CursorTop => self.set_cursor(0),
            InputAction::CursorBottom => self.set_cursor(usize::MAX),
            InputAction::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Files => Focus::Shortcuts,
                    Focus::Shortcuts => Focus::Files,
                };
            }
            InputAction::Select(modifiers) => self.select_at_cursor(modifiers),
            InputAction::Activate => self.activate_at_cursor(),
            InputAction::ToggleFavorite => self.toggle_favorite(),
            InputAction::CycleSelectionMode => {
                let next = match self.chooser.selection_mode() {
                    SelectionMode::Files => SelectionMode::Directories,
                    SelectionMode::Directories => SelectionMode::FilesAndDirectories,
                    SelectionMode::FilesAndDirectories => SelectionMode::Files,
                };
                self.dispatch(Command::SetSelectionMode(next));
            }
            InputAction::ToggleMultiselection => {
                let enabled = !self.chooser.multiselection_enabled();
                self.dispatch(Command::SetMultiselection(enabled));
                self.status_message = Some(
                    if enabled {
                        "Multiselection on"
                    } else {
                        "Multiselection off"
                    }
                    .to_string(),
                );
            }
            InputAction::Confirm => self.confirm(),
            InputAction::InputChar(c) => self.edit_input(|buffer| buffer.push(c)),
            InputAction::InputBackspace => self.edit_input(|buffer| {
                buffer.pop();
            }),
            InputAction::InputSubmit => self.submit_input(),
            InputAction::SearchDown => self.move_search(1),
            InputAction::SearchUp => self.move_search(-1),
            InputAction::AnswerOverwrite(answer) => {
                self.mode = AppMode::Normal;
                self.dispatch(Command::AnswerOverwrite(answer));
            }
            InputAction::Dismiss => self.mode = AppMode::Normal,
            InputAction::None => {}
        }

        self.drain_events();
    }

    /// Folds every pending chooser event into the display state.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::DirectoryChanged { dir, listing } => {
                if dir == self.shown_dir {
                    self.cursor = self.cursor.min(listing.len().saturating_sub(1));
                } else {
                    self.cursor = 0;
                    self.shown_dir = dir;
                }
                self.file_name.clear();
            }
            Event::HistoryAvailabilityChanged { back, forward } => {
                self.can_go_back = back;
                self.can_go_forward = forward;
            }
            Event::SelectionChanged { text, .. } => self.file_name = text,
            Event::Confirmed(outcome) => self.on_confirmed(outcome),
            Event::Cancelled => self.finished = Some(Finish::Cancelled),
            Event::TitleChanged(title) => self.title = title,
            Event::ShortcutsChanged(shortcuts) => {
                self.shortcut_cursor = self.shortcut_cursor.min(shortcuts.len().saturating_sub(1));
            }
        }
    }

    fn on_confirmed(&mut self, outcome: ConfirmOutcome) {
        match outcome {
            ConfirmOutcome::Completed(paths) => self.finished = Some(Finish::Chosen(paths)),
            ConfirmOutcome::NavigatedInto(_) => {}
            ConfirmOutcome::RejectedWrongType => {
                self.mode = AppMode::Message(ChooserText::PopupOnlyDirectories);
            }
            ConfirmOutcome::RejectedNoSelection => {
                self.mode = AppMode::Message(ChooserText::PopupChooseFile);
            }
            ConfirmOutcome::PendingOverwriteConfirmation(paths) => {
                self.mode = AppMode::Overwrite(paths);
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        if let Err(e) = self.chooser.dispatch(command) {
            self.report(e);
        }
    }

    fn report(&mut self, error: CoreError) {
        match error {
            CoreError::InvalidDirectory(ref dir) => {
                tracing::debug!("rejected directory {}", dir.display());
                self.mode = AppMode::Message(ChooserText::PopupDirectoryDoesNotExist);
            }
            CoreError::InvalidFilename(_) => {
                self.mode = AppMode::Message(ChooserText::PopupFilenameInvalid);
            }
            CoreError::NoHistory => {}
            other => {
                tracing::warn!("chooser error: {other}");
                self.status_message = Some(other.to_string());
            }
        }
    }

    fn enter_mode(&mut self, mode: AppMode) {
        self.mode = match mode {
            AppMode::FileName(buffer) if buffer.is_empty() => {
                AppMode::FileName(self.file_name.clone())
            }
            AppMode::PathInput(buffer) if buffer.is_empty() => {
                AppMode::PathInput(self.chooser.current_dir().display().to_string())
            }
            other => other,
        };
    }

    // --- cursor ---

    fn move_cursor(&mut self, delta: isize) {
        let current = match self.focus {
            Focus::Files => self.cursor,
            Focus::Shortcuts => self.shortcut_cursor,
        };
        self.set_cursor(current.saturating_add_signed(delta));
    }

    fn set_cursor(&mut self, index: usize) {
        match self.focus {
            Focus::Files => {
                let last = self.chooser.listing().len().saturating_sub(1);
                self.cursor = index.min(last);
            }
            Focus::Shortcuts => {
                let last = self.chooser.shortcuts().len().saturating_sub(1);
                self.shortcut_cursor = index.min(last);
            }
        }
    }

    // --- selection ---

    fn select_at_cursor(&mut self, modifiers: Modifiers) {
        match self.focus {
            Focus::Files => {
                if let Some(path) = self.cursor_entry().map(|e| e.path().to_path_buf()) {
                    self.dispatch(Command::Click(path, modifiers));
                }
            }
            Focus::Shortcuts => self.dispatch(Command::SelectShortcut(self.shortcut_cursor)),
        }
    }

    /// Enter on a directory opens it. Enter on a file selects it if needed
    /// and then behaves like a double click.
    fn activate_at_cursor(&mut self) {
        match self.focus {
            Focus::Files => {
                let Some(entry) = self.cursor_entry().cloned() else {
                    return;
                };
                if !entry.is_dir() && !self.chooser.selection().contains(entry.path()) {
                    self.dispatch(Command::Click(entry.path().to_path_buf(), Modifiers::NONE));
                }
                self.dispatch(Command::Activate(entry.path().to_path_buf()));
            }
            Focus::Shortcuts => {
                self.dispatch(Command::ActivateShortcut(self.shortcut_cursor));
                self.drain_events();
                if matches!(self.mode, AppMode::Normal) {
                    self.focus = Focus::Files;
                }
            }
        }
    }

    fn toggle_favorite(&mut self) {
        let target = match self.focus {
            Focus::Files => match self.cursor_entry() {
                Some(entry) if entry.is_dir() => entry.path().to_path_buf(),
                _ => self.chooser.current_dir().to_path_buf(),
            },
            Focus::Shortcuts => match self.cursor_shortcut() {
                Some(s) if s.kind() == ShortcutKind::Favorite => s.path().to_path_buf(),
                _ => return,
            },
        };

        if self.chooser.is_favorite(&target) {
            self.dispatch(Command::RemoveFavorite(target));
            self.status_message = Some(ChooserText::RemoveFromFavorites.to_string());
        } else {
            self.dispatch(Command::AddFavorite(target));
            self.status_message = Some(ChooserText::AddToFavorites.to_string());
        }
    }

    // --- confirmation ---

    fn confirm(&mut self) {
        let file_name = self.file_name.clone();
        self.dispatch(Command::Confirm(file_name));
    }

    // --- text input ---

    fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        match &mut self.mode {
            AppMode::FileName(buffer) | AppMode::PathInput(buffer) => edit(buffer),
            AppMode::Search { query, selected } => {
                edit(query);
                *selected = 0;
            }
            _ => {}
        }
    }

    fn move_search(&mut self, delta: isize) {
        let AppMode::Search { query, selected } = &self.mode else {
            return;
        };
        let last = self.search_matches(query).len().saturating_sub(1);
        let next = selected.saturating_add_signed(delta).min(last);
        if let AppMode::Search { selected, .. } = &mut self.mode {
            *selected = next;
        }
    }

    fn submit_input(&mut self) {
        match std::mem::replace(&mut self.mode, AppMode::Normal) {
            AppMode::FileName(buffer) => {
                if buffer != self.file_name {
                    self.dispatch(Command::FileNameTyped);
                    self.drain_events();
                    self.file_name = buffer;
                }
                self.confirm();
            }
            AppMode::PathInput(buffer) => self.dispatch(Command::NavigateTyped(buffer)),
            AppMode::Search { query, selected } => {
                let target = self
                    .search_matches(&query)
                    .get(selected)
                    .map(|m| m.entry().path().to_path_buf());
                if let Some(path) = target {
                    self.jump_to(&path);
                }
            }
            other => self.mode = other,
        }
    }

    fn jump_to(&mut self, path: &Path) {
        if let Some(index) = self.chooser.listing().iter().position(|e| e.path() == path) {
            self.focus = Focus::Files;
            self.cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chooser_core::{
        ChooserMode, FavoritesStore, FixedPlaces, MemoryBackend, MemoryFs, OverwriteAnswer, Place,
    };

    // /home/ana listing: Desktop, notes.txt, projects, readme.txt
    fn tree() -> MemoryFs {
        MemoryFs::new()
            .with_dir("/home/ana/Desktop")
            .with_file("/home/ana/notes.txt", 120)
            .with_dir("/home/ana/projects")
            .with_file("/home/ana/projects/main.rs", 10)
            .with_file("/home/ana/readme.txt", 2048)
    }

    fn places() -> FixedPlaces {
        let place = |path: &str, label: &str| Place {
            path: PathBuf::from(path),
            label: label.into(),
            readable: true,
            writable: true,
        };
        FixedPlaces {
            home: Some(place("/home/ana", "ana")),
            desktop: Some(place("/home/ana/Desktop", "Desktop")),
            roots: vec![place("/", "/")],
        }
    }

    fn chooser(mode: ChooserMode) -> FileChooser<MemoryFs> {
        let favorites = FavoritesStore::open(Box::new(MemoryBackend::new()), "tui");
        FileChooser::new(
            tree(),
            Box::new(places()),
            favorites,
            mode,
            Path::new("/home/ana"),
        )
        .unwrap()
    }

    fn app(chooser: FileChooser<MemoryFs>) -> App<MemoryFs> {
        App::new(chooser, KeysConfig::default(), Theme::default())
    }

    fn open_app() -> App<MemoryFs> {
        app(chooser(ChooserMode::Open))
    }

    fn at(app: &mut App<MemoryFs>, index: usize) {
        app.apply(InputAction::CursorTop);
        for _ in 0..index {
            app.apply(InputAction::CursorDown);
        }
    }

    fn type_text(app: &mut App<MemoryFs>, text: &str) {
        for c in text.chars() {
            app.apply(InputAction::InputChar(c));
        }
    }

    fn home(name: &str) -> PathBuf {
        Path::new("/home/ana").join(name)
    }

    // --- cursor ---

    #[test]
    fn cursor_moves_and_clamps() {
        let mut app = open_app();
        for _ in 0..10 {
            app.apply(InputAction::CursorDown);
        }
        assert_eq!(app.cursor(), 3);

        app.apply(InputAction::CursorUp);
        assert_eq!(app.cursor(), 2);

        app.apply(InputAction::CursorTop);
        app.apply(InputAction::CursorUp);
        assert_eq!(app.cursor(), 0);

        app.apply(InputAction::CursorBottom);
        assert_eq!(app.cursor(), 3);
    }

    #[test]
    fn activate_directory_navigates_and_resets_cursor() {
        let mut app = open_app();
        at(&mut app, 2);

        app.apply(InputAction::Activate);

        assert_eq!(app.chooser().current_dir(), home("projects"));
        assert_eq!(app.cursor(), 0);
        assert!(app.can_go_back());
        assert!(!app.can_go_forward());
    }

    #[test]
    fn back_then_forward_updates_history_flags() {
        let mut app = open_app();
        at(&mut app, 2);
        app.apply(InputAction::Activate);

        app.apply(InputAction::Command(Command::GoBack));
        assert_eq!(app.chooser().current_dir(), Path::new("/home/ana"));
        assert!(!app.can_go_back());
        assert!(app.can_go_forward());

        app.apply(InputAction::Command(Command::GoForward));
        assert_eq!(app.chooser().current_dir(), home("projects"));
    }

    #[test]
    fn go_back_without_history_is_silent() {
        let mut app = open_app();
        app.apply(InputAction::Command(Command::GoBack));
        app.apply(InputAction::Command(Command::GoForward));
        assert!(app.status_message().is_none());
        assert_eq!(app.mode(), &AppMode::Normal);
    }

    // --- selection ---

    #[test]
    fn select_fills_and_clears_file_name() {
        let mut app = open_app();
        at(&mut app, 1);

        app.apply(InputAction::Select(Modifiers::NONE));
        assert_eq!(app.file_name(), "notes.txt");

        app.apply(InputAction::Select(Modifiers::NONE));
        assert_eq!(app.file_name(), "");
    }

    #[test]
    fn toggle_selection_with_multiselection() {
        let mut app = app(chooser(ChooserMode::Open).with_multiselection(true));
        at(&mut app, 1);
        app.apply(InputAction::Select(Modifiers::NONE));
        at(&mut app, 3);
        app.apply(InputAction::Select(Modifiers::MULTI));

        assert_eq!(app.chooser().selection().len(), 2);
        assert_eq!(app.file_name(), "\"notes.txt\" \"readme.txt\" ");
    }

    #[test]
    fn navigation_clears_file_name() {
        let mut app = open_app();
        at(&mut app, 1);
        app.apply(InputAction::Select(Modifiers::NONE));

        app.apply(InputAction::Command(Command::GoParent));

        assert_eq!(app.file_name(), "");
        assert!(app.chooser().selection().is_empty());
    }

    #[test]
    fn cycle_selection_mode_changes_title() {
        let mut app = open_app();
        assert_eq!(app.title(), "Choose files");

        app.apply(InputAction::CycleSelectionMode);
        assert_eq!(app.title(), "Choose directories");

        app.apply(InputAction::CycleSelectionMode);
        app.apply(InputAction::CycleSelectionMode);
        assert_eq!(app.title(), "Choose files");
    }

    #[test]
    fn toggle_multiselection_flips_chooser_flag() {
        let mut app = open_app();
        app.apply(InputAction::ToggleMultiselection);
        assert!(app.chooser().multiselection_enabled());
        app.apply(InputAction::ToggleMultiselection);
        assert!(!app.chooser().multiselection_enabled());
    }

    // --- confirmation ---

    #[test]
    fn enter_on_file_selects_and_completes() {
        let mut app = open_app();
        at(&mut app, 1);

        app.apply(InputAction::Activate);

        assert_eq!(
            app.finished(),
            Some(&Finish::Chosen(vec![home("notes.txt")]))
        );
    }

    #[test]
    fn confirm_without_selection_shows_message() {
        let mut app = open_app();
        app.apply(InputAction::Confirm);
        assert_eq!(
            app.mode(),
            &AppMode::Message(ChooserText::PopupChooseFile)
        );
        assert!(app.finished().is_none());

        app.apply(InputAction::Dismiss);
        assert_eq!(app.mode(), &AppMode::Normal);
    }

    #[test]
    fn directories_mode_rejects_file() {
        let mut app = app(chooser(ChooserMode::Open).with_selection_mode(SelectionMode::Directories));
        at(&mut app, 1);
        app.apply(InputAction::Select(Modifiers::NONE));

        app.apply(InputAction::Confirm);

        assert_eq!(
            app.mode(),
            &AppMode::Message(ChooserText::PopupOnlyDirectories)
        );
    }

    #[test]
    fn save_typed_name_completes() {
        let mut app = app(chooser(ChooserMode::Save));
        app.apply(InputAction::EnterMode(AppMode::FileName(String::new())));
        type_text(&mut app, "out.txt");

        app.apply(InputAction::InputSubmit);

        assert_eq!(app.finished(), Some(&Finish::Chosen(vec![home("out.txt")])));
    }

    #[test]
    fn save_invalid_name_shows_message() {
        let mut app = app(chooser(ChooserMode::Save));
        app.apply(InputAction::EnterMode(AppMode::FileName(String::new())));
        type_text(&mut app, "a/b");

        app.apply(InputAction::InputSubmit);

        assert_eq!(
            app.mode(),
            &AppMode::Message(ChooserText::PopupFilenameInvalid)
        );
        assert!(app.finished().is_none());
    }

    #[test]
    fn overwrite_no_keeps_dialog_open_then_yes_completes() {
        let mut app = app(chooser(ChooserMode::Save));
        at(&mut app, 3);
        app.apply(InputAction::Select(Modifiers::NONE));

        app.apply(InputAction::Confirm);
        assert_eq!(app.mode(), &AppMode::Overwrite(vec![home("readme.txt")]));

        app.apply(InputAction::AnswerOverwrite(OverwriteAnswer::No));
        assert_eq!(app.mode(), &AppMode::Normal);
        assert!(app.finished().is_none());
        assert_eq!(app.file_name(), "readme.txt");

        app.apply(InputAction::Confirm);
        app.apply(InputAction::AnswerOverwrite(OverwriteAnswer::Yes));
        assert_eq!(
            app.finished(),
            Some(&Finish::Chosen(vec![home("readme.txt")]))
        );
    }

    #[test]
    fn typing_a_name_drops_selection_but_keeps_text() {
        let mut app = open_app();
        at(&mut app, 1);
        app.apply(InputAction::Select(Modifiers::NONE));

        app.apply(InputAction::EnterMode(AppMode::FileName(String::new())));
        assert_eq!(app.mode(), &AppMode::FileName("notes.txt".to_string()));
        for _ in 0.."notes.txt".len() {
            app.apply(InputAction::InputBackspace);
        }
        type_text(&mut app, "new.txt");
        app.apply(InputAction::InputSubmit);

        assert!(app.chooser().selection().is_empty());
        assert_eq!(app.file_name(), "new.txt");
        assert_eq!(
            app.mode(),
            &AppMode::Message(ChooserText::PopupChooseFile)
        );
    }

    #[test]
    fn quit_cancels() {
        let mut app = open_app();
        app.apply(InputAction::Quit);
        assert_eq!(app.finished(), Some(&Finish::Cancelled));
    }

    // --- typed path and search ---

    #[test]
    fn path_input_is_seeded_with_current_dir() {
        let mut app = open_app();
        app.apply(InputAction::EnterMode(AppMode::PathInput(String::new())));
        assert_eq!(app.mode(), &AppMode::PathInput("/home/ana".to_string()));
    }

    #[test]
    fn typed_relative_path_navigates() {
        let mut app = open_app();
        app.apply(InputAction::EnterMode(AppMode::PathInput("projects".to_string())));
        app.apply(InputAction::InputSubmit);

        assert_eq!(app.chooser().current_dir(), home("projects"));
        assert_eq!(app.mode(), &AppMode::Normal);
    }

    #[test]
    fn typed_missing_path_shows_message() {
        let mut app = open_app();
        app.apply(InputAction::EnterMode(AppMode::PathInput("/nope".to_string())));
        app.apply(InputAction::InputSubmit);

        assert_eq!(
            app.mode(),
            &AppMode::Message(ChooserText::PopupDirectoryDoesNotExist)
        );
        assert_eq!(app.chooser().current_dir(), Path::new("/home/ana"));
    }

    #[test]
    fn search_submit_moves_cursor_to_match() {
        let mut app = open_app();
        app.apply(InputAction::EnterMode(AppMode::Search {
            query: String::new(),
            selected: 0,
        }));
        type_text(&mut app, "readme");
        app.apply(InputAction::InputSubmit);

        assert_eq!(app.mode(), &AppMode::Normal);
        assert_eq!(app.cursor(), 3);
    }

    #[test]
    fn search_selection_stays_in_range() {
        let mut app = open_app();
        app.apply(InputAction::EnterMode(AppMode::Search {
            query: "readme".to_string(),
            selected: 0,
        }));
        app.apply(InputAction::SearchDown);
        app.apply(InputAction::SearchDown);

        assert!(matches!(app.mode(), AppMode::Search { selected: 0, .. }));
    }

    // --- shortcuts and favorites ---

    #[test]
    fn activating_shortcut_navigates_and_refocuses_files() {
        let mut app = open_app();
        app.apply(InputAction::ToggleFocus);
        assert_eq!(app.focus(), Focus::Shortcuts);
        assert_eq!(app.cursor_shortcut().unwrap().label(), "Desktop");

        app.apply(InputAction::Activate);

        assert_eq!(app.chooser().current_dir(), home("Desktop"));
        assert_eq!(app.focus(), Focus::Files);
    }

    #[test]
    fn selecting_shortcut_puts_it_in_slot() {
        let mut app = open_app();
        app.apply(InputAction::ToggleFocus);
        app.apply(InputAction::CursorDown);
        app.apply(InputAction::Select(Modifiers::NONE));

        let slot = app.chooser().selection().selected_shortcut().unwrap();
        assert_eq!(slot.path(), Path::new("/home/ana"));
    }

    #[test]
    fn toggle_favorite_on_directory_under_cursor() {
        let mut app = open_app();
        at(&mut app, 2);

        app.apply(InputAction::ToggleFavorite);
        assert_eq!(app.chooser().favorites(), &[home("projects")]);
        assert!(app
            .chooser()
            .shortcuts()
            .iter()
            .any(|s| s.kind() == ShortcutKind::Favorite));

        app.apply(InputAction::ToggleFavorite);
        assert!(app.chooser().favorites().is_empty());
    }

    #[test]
    fn favorite_can_be_removed_from_shortcut_panel() {
        let mut app = open_app();
        at(&mut app, 2);
        app.apply(InputAction::ToggleFavorite);

        app.apply(InputAction::ToggleFocus);
        app.apply(InputAction::CursorBottom);
        app.apply(InputAction::ToggleFavorite);

        assert!(app.chooser().favorites().is_empty());
        assert!(app.shortcut_cursor() < app.chooser().shortcuts().len());
    }
}
