use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use chooser_core::config::settings::{KeysConfig, ModifierKey};
use chooser_core::{Command, Modifiers, OverwriteAnswer};

use crate::app::{AppMode, Focus};

/// Actions that can result from a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command as is.
    Command(Command),
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Cancel the dialog.
    Quit,
    CursorDown,
    CursorUp,
    CursorTop,
    CursorBottom,
    /// Switch focus between the shortcut panel and the file list.
    ToggleFocus,
    /// Click the item under the cursor with these modifiers held.
    Select(Modifiers),
    /// Double click the item under the cursor.
    Activate,
    /// Add or remove the directory under the cursor as a favorite.
    ToggleFavorite,
    /// Files, then directories, then both.
    CycleSelectionMode,
    ToggleMultiselection,
    /// Press the Open/Save button.
    Confirm,
    /// Append a character to the active text input.
    InputChar(char),
    /// Remove the last character from the active text input.
    InputBackspace,
    /// Submit the active text input.
    InputSubmit,
    /// Move down in search results.
    SearchDown,
    /// Move up in search results.
    SearchUp,
    AnswerOverwrite(OverwriteAnswer),
    /// Close a message popup.
    Dismiss,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction based on the current mode.
///
/// `keys` decides which held modifier turns a selection key press into a
/// toggle or a range selection.
pub fn handle_key(key: KeyEvent, mode: &AppMode, focus: Focus, keys: &KeysConfig) -> InputAction {
    match mode {
        AppMode::Normal => handle_normal_key(key, focus, keys),
        AppMode::FileName(_) | AppMode::PathInput(_) => handle_text_key(key),
        AppMode::Search { .. } => handle_search_key(key),
        AppMode::Overwrite(_) => handle_overwrite_key(key),
        AppMode::Message(_) => handle_message_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

/// Resolves held terminal modifiers into selection modifiers.
pub fn selection_modifiers(held: KeyModifiers, keys: &KeysConfig) -> Modifiers {
    Modifiers {
        multi: is_held(keys.multiselect, held),
        group: is_held(keys.group_multiselect, held),
    }
}

fn is_held(key: ModifierKey, held: KeyModifiers) -> bool {
    match key {
        ModifierKey::Ctrl => held.contains(KeyModifiers::CONTROL),
        ModifierKey::Shift => held.contains(KeyModifiers::SHIFT),
        ModifierKey::Alt => held.contains(KeyModifiers::ALT),
    }
}

fn handle_normal_key(key: KeyEvent, focus: Focus, keys: &KeysConfig) -> InputAction {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Left if alt => InputAction::Command(Command::GoBack),
        KeyCode::Right if alt => InputAction::Command(Command::GoForward),
        KeyCode::Up if alt => InputAction::Command(Command::GoParent),
        KeyCode::Char(' ') => InputAction::Select(selection_modifiers(key.modifiers, keys)),
        KeyCode::Char('v') => InputAction::Select(Modifiers::MULTI),
        KeyCode::Char('V') => InputAction::Select(Modifiers::GROUP),
        KeyCode::Down | KeyCode::Char('j') => InputAction::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => InputAction::CursorUp,
        KeyCode::Home | KeyCode::Char('g') => InputAction::CursorTop,
        KeyCode::End | KeyCode::Char('G') => InputAction::CursorBottom,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => {
            InputAction::Command(Command::GoParent)
        }
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => InputAction::Activate,
        KeyCode::Char('H') => InputAction::Command(Command::GoBack),
        KeyCode::Char('L') => InputAction::Command(Command::GoForward),
        KeyCode::Char('r') => InputAction::Command(Command::Refresh),
        KeyCode::Char('a') if focus == Focus::Files => InputAction::Command(Command::SelectAll),
        KeyCode::Tab => InputAction::ToggleFocus,
        KeyCode::Char('f') => InputAction::ToggleFavorite,
        KeyCode::Char('m') => InputAction::CycleSelectionMode,
        KeyCode::Char('M') => InputAction::ToggleMultiselection,
        KeyCode::Char('o') => InputAction::Confirm,
        KeyCode::Char('n') => InputAction::EnterMode(AppMode::FileName(String::new())),
        KeyCode::Char('p') => InputAction::EnterMode(AppMode::PathInput(String::new())),
        KeyCode::Char('/') => InputAction::EnterMode(AppMode::Search {
            query: String::new(),
            selected: 0,
        }),
        KeyCode::Char('?') => InputAction::EnterMode(AppMode::Help),
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    }
}

fn handle_text_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::EnterMode(AppMode::Normal),
        KeyCode::Enter => InputAction::InputSubmit,
        KeyCode::Backspace => InputAction::InputBackspace,
        KeyCode::Char(c) => InputAction::InputChar(c),
        _ => InputAction::None,
    }
}

fn handle_search_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::EnterMode(AppMode::Normal),
        KeyCode::Enter => InputAction::InputSubmit,
        KeyCode::Backspace => InputAction::InputBackspace,
        KeyCode::Down => InputAction::SearchDown,
        KeyCode::Up => InputAction::SearchUp,
        KeyCode::Char(c) => InputAction::InputChar(c),
        _ => InputAction::None,
    }
}

fn handle_overwrite_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::AnswerOverwrite(OverwriteAnswer::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            InputAction::AnswerOverwrite(OverwriteAnswer::No)
        }
        _ => InputAction::None,
    }
}

fn handle_message_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ') => {
            InputAction::Dismiss
        }
        _ => InputAction::None,
    }
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chooser_core::ChooserText;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn normal(key: KeyEvent) -> InputAction {
        handle_key(key, &AppMode::Normal, Focus::Files, &KeysConfig::default())
    }

    // --- Normal mode navigation ---

    #[test]
    fn normal_j_k_move_cursor() {
        assert_eq!(normal(key(KeyCode::Char('j'))), InputAction::CursorDown);
        assert_eq!(normal(key(KeyCode::Char('k'))), InputAction::CursorUp);
        assert_eq!(normal(key(KeyCode::Down)), InputAction::CursorDown);
        assert_eq!(normal(key(KeyCode::Up)), InputAction::CursorUp);
    }

    #[test]
    fn normal_g_and_capital_g_jump() {
        assert_eq!(normal(key(KeyCode::Char('g'))), InputAction::CursorTop);
        assert_eq!(normal(key(KeyCode::Char('G'))), InputAction::CursorBottom);
    }

    #[test]
    fn normal_h_goes_to_parent() {
        assert_eq!(
            normal(key(KeyCode::Char('h'))),
            InputAction::Command(Command::GoParent)
        );
        assert_eq!(
            normal(key(KeyCode::Backspace)),
            InputAction::Command(Command::GoParent)
        );
    }

    #[test]
    fn normal_enter_activates() {
        assert_eq!(normal(key(KeyCode::Enter)), InputAction::Activate);
        assert_eq!(normal(key(KeyCode::Char('l'))), InputAction::Activate);
    }

    #[test]
    fn normal_history_keys() {
        assert_eq!(
            normal(key(KeyCode::Char('H'))),
            InputAction::Command(Command::GoBack)
        );
        assert_eq!(
            normal(key_with_mod(KeyCode::Right, KeyModifiers::ALT)),
            InputAction::Command(Command::GoForward)
        );
        assert_eq!(
            normal(key_with_mod(KeyCode::Left, KeyModifiers::ALT)),
            InputAction::Command(Command::GoBack)
        );
    }

    #[test]
    fn normal_q_esc_and_ctrl_c_quit() {
        assert_eq!(normal(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(normal(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(
            normal(key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn normal_unknown_key_none() {
        assert_eq!(normal(key(KeyCode::Char('z'))), InputAction::None);
        assert_eq!(normal(key(KeyCode::F(5))), InputAction::None);
    }

    #[test]
    fn select_all_only_in_file_list() {
        assert_eq!(
            normal(key(KeyCode::Char('a'))),
            InputAction::Command(Command::SelectAll)
        );
        let action = handle_key(
            key(KeyCode::Char('a')),
            &AppMode::Normal,
            Focus::Shortcuts,
            &KeysConfig::default(),
        );
        assert_eq!(action, InputAction::None);
    }

    // --- Selection modifiers ---

    #[test]
    fn space_without_modifier_is_plain_click() {
        assert_eq!(
            normal(key(KeyCode::Char(' '))),
            InputAction::Select(Modifiers::NONE)
        );
    }

    #[test]
    fn space_with_default_modifiers() {
        assert_eq!(
            normal(key_with_mod(KeyCode::Char(' '), KeyModifiers::CONTROL)),
            InputAction::Select(Modifiers::MULTI)
        );
        assert_eq!(
            normal(key_with_mod(KeyCode::Char(' '), KeyModifiers::SHIFT)),
            InputAction::Select(Modifiers::GROUP)
        );
    }

    #[test]
    fn configured_modifiers_are_honoured() {
        let keys = KeysConfig {
            multiselect: ModifierKey::Alt,
            group_multiselect: ModifierKey::Ctrl,
        };
        assert_eq!(
            selection_modifiers(KeyModifiers::ALT, &keys),
            Modifiers::MULTI
        );
        assert_eq!(
            selection_modifiers(KeyModifiers::CONTROL, &keys),
            Modifiers::GROUP
        );
        assert_eq!(
            selection_modifiers(KeyModifiers::SHIFT, &keys),
            Modifiers::NONE
        );
    }

    #[test]
    fn v_keys_are_modifier_free_alternatives() {
        assert_eq!(
            normal(key(KeyCode::Char('v'))),
            InputAction::Select(Modifiers::MULTI)
        );
        assert_eq!(
            normal(key(KeyCode::Char('V'))),
            InputAction::Select(Modifiers::GROUP)
        );
    }

    // --- Mode entry ---

    #[test]
    fn normal_n_enters_file_name() {
        assert_eq!(
            normal(key(KeyCode::Char('n'))),
            InputAction::EnterMode(AppMode::FileName(String::new()))
        );
    }

    #[test]
    fn normal_slash_enters_search() {
        assert!(matches!(
            normal(key(KeyCode::Char('/'))),
            InputAction::EnterMode(AppMode::Search { .. })
        ));
    }

    #[test]
    fn normal_o_confirms() {
        assert_eq!(normal(key(KeyCode::Char('o'))), InputAction::Confirm);
    }

    // --- Text input ---

    #[test]
    fn text_input_keys() {
        let mode = AppMode::PathInput("/tm".to_string());
        let keys = KeysConfig::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('p')), &mode, Focus::Files, &keys),
            InputAction::InputChar('p')
        );
        assert_eq!(
            handle_key(key(KeyCode::Backspace), &mode, Focus::Files, &keys),
            InputAction::InputBackspace
        );
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mode, Focus::Files, &keys),
            InputAction::InputSubmit
        );
        assert_eq!(
            handle_key(key(KeyCode::Esc), &mode, Focus::Files, &keys),
            InputAction::EnterMode(AppMode::Normal)
        );
    }

    #[test]
    fn search_arrows_move_selection() {
        let mode = AppMode::Search {
            query: "re".to_string(),
            selected: 0,
        };
        let keys = KeysConfig::default();
        assert_eq!(
            handle_key(key(KeyCode::Down), &mode, Focus::Files, &keys),
            InputAction::SearchDown
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('j')), &mode, Focus::Files, &keys),
            InputAction::InputChar('j')
        );
    }

    // --- Dialogs ---

    #[test]
    fn overwrite_y_and_n() {
        let mode = AppMode::Overwrite(vec![PathBuf::from("/tmp/a")]);
        let keys = KeysConfig::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('Y')), &mode, Focus::Files, &keys),
            InputAction::AnswerOverwrite(OverwriteAnswer::Yes)
        );
        assert_eq!(
            handle_key(key(KeyCode::Esc), &mode, Focus::Files, &keys),
            InputAction::AnswerOverwrite(OverwriteAnswer::No)
        );
    }

    #[test]
    fn message_is_dismissed_by_enter() {
        let mode = AppMode::Message(ChooserText::PopupChooseFile);
        let keys = KeysConfig::default();
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mode, Focus::Files, &keys),
            InputAction::Dismiss
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('x')), &mode, Focus::Files, &keys),
            InputAction::None
        );
    }

    #[test]
    fn help_question_returns_to_normal() {
        let keys = KeysConfig::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('?')), &AppMode::Help, Focus::Files, &keys),
            InputAction::EnterMode(AppMode::Normal)
        );
    }
}
