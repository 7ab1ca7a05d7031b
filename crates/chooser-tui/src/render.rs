use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use chooser_core::{ChooserText, FileSystem};

use crate::app::{App, AppMode, Focus};
use crate::theme::{parse_color, Theme};
use crate::ui::file_name::{render_file_name, FileNameProps};
use crate::ui::panel::{render_file_list, FileListProps};
use crate::ui::popup::{render_popup, render_warning_popup};
use crate::ui::shortcuts::{render_shortcuts, ShortcutsProps};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

const SHORTCUTS_WIDTH: u16 = 24;
const MAX_SEARCH_RESULTS: usize = 15;

/// Draws the whole chooser: title, places, listing, file-name row, status
/// bar, then whichever popup the current mode needs.
pub fn render<F: FileSystem>(f: &mut Frame, app: &App<F>) {
    let theme = app.theme();
    let chooser = app.chooser();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, rows[0], app, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SHORTCUTS_WIDTH), Constraint::Min(10)])
        .split(rows[1]);

    render_shortcuts(
        f,
        body[0],
        &ShortcutsProps {
            shortcuts: chooser.shortcuts(),
            cursor: app.shortcut_cursor(),
            selected: chooser.selection().selected_shortcut(),
            is_active: app.focus() == Focus::Shortcuts,
        },
        theme,
    );

    let dir_name = chooser.current_dir().display().to_string();
    render_file_list(
        f,
        body[1],
        &FileListProps {
            entries: chooser.listing(),
            selection: chooser.selection(),
            cursor: app.cursor(),
            title: &dir_name,
            is_active: app.focus() == Focus::Files,
        },
        theme,
    );

    let (field_text, editing) = match app.mode() {
        AppMode::FileName(buffer) => (buffer.as_str(), true),
        _ => (app.file_name(), false),
    };
    render_file_name(
        f,
        rows[2],
        &FileNameProps {
            text: field_text,
            editing,
            confirm_label: chooser.confirm_label(),
        },
        theme,
    );

    render_statusbar(
        f,
        rows[3],
        &StatusBarProps {
            entry_count: chooser.listing().len(),
            cursor: app.cursor(),
            selected_count: chooser.selection().len(),
            can_go_back: app.can_go_back(),
            can_go_forward: app.can_go_forward(),
            selection_mode: chooser.selection_mode(),
            multiselection: chooser.multiselection_enabled(),
            status_message: app.status_message(),
        },
        theme,
    );

    match app.mode() {
        AppMode::Normal | AppMode::FileName(_) => {}
        AppMode::PathInput(buffer) => render_path_input_popup(f, buffer, theme),
        AppMode::Search { query, selected } => {
            render_search_overlay(f, app, query, *selected, theme)
        }
        AppMode::Overwrite(paths) => render_overwrite_popup(f, paths, theme),
        AppMode::Message(text) => render_message_popup(f, *text, theme),
        AppMode::Help => render_help_popup(f, theme),
    }
}

fn render_title<F: FileSystem>(f: &mut Frame, area: Rect, app: &App<F>, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.title()),
            Style::default()
                .fg(parse_color(&theme.panel.cursor_fg))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ? for help"),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_path_input_popup(f: &mut Frame, buffer: &str, theme: &Theme) {
    let lines = vec![
        format!("{buffer}_"),
        String::new(),
        "Enter to go, Esc to cancel".to_owned(),
    ];
    render_popup(f, "Go to directory", &lines, theme);
}

fn render_search_overlay<F: FileSystem>(
    f: &mut Frame,
    app: &App<F>,
    query: &str,
    selected: usize,
    theme: &Theme,
) {
    let results = app.search_matches(query);
    let total = app.chooser().listing().len();

    let (win_start, win_end) = visible_window(selected, results.len(), MAX_SEARCH_RESULTS);

    let mut lines: Vec<String> = vec![
        format!("/{query}_"),
        format!("{}/{total} matches", results.len()),
        String::new(),
    ];

    if win_start > 0 {
        lines.push(format!("  ... {win_start} more above"));
    }

    for (i, m) in results
        .iter()
        .enumerate()
        .skip(win_start)
        .take(win_end - win_start)
    {
        let marker = if i == selected { "> " } else { "  " };
        lines.push(format!("{marker}{}", m.entry().name()));
    }

    if win_end < results.len() {
        lines.push(format!("  ... {} more below", results.len() - win_end));
    }

    if results.is_empty() && !query.is_empty() {
        lines.push("  No matches found".to_owned());
    }

    render_popup(f, "Search", &lines, theme);
}

fn render_overwrite_popup(f: &mut Frame, paths: &[std::path::PathBuf], theme: &Theme) {
    let question = if paths.len() == 1 {
        ChooserText::PopupFileExistOverwrite
    } else {
        ChooserText::PopupMultipleFileExistOverwrite
    };

    let mut lines = vec![question.to_string(), String::new()];
    lines.extend(paths.iter().map(|p| format!("  {}", p.display())));
    lines.push(String::new());
    lines.push(format!("[y] {}  [n] {}", ChooserText::Yes, ChooserText::No));

    render_warning_popup(f, ChooserText::PopupTitle.as_str(), &lines, theme);
}

fn render_message_popup(f: &mut Frame, text: ChooserText, theme: &Theme) {
    let lines = vec![
        text.to_string(),
        String::new(),
        format!("[Enter] {}", ChooserText::Ok),
    ];
    render_popup(f, ChooserText::PopupTitle.as_str(), &lines, theme);
}

fn render_help_popup(f: &mut Frame, theme: &Theme) {
    let lines = vec![
        "j/k      - Move down/up".to_owned(),
        "g/G      - Jump to top/bottom".to_owned(),
        "h/l      - Parent/Open directory".to_owned(),
        "Enter    - Open directory, choose file".to_owned(),
        "H/L      - Back/Forward".to_owned(),
        "Space    - Select (Ctrl: toggle, Shift: range)".to_owned(),
        "v/V      - Toggle/Range select".to_owned(),
        "a        - Select all".to_owned(),
        "Tab      - Switch places/files".to_owned(),
        "f        - Add/remove favorite".to_owned(),
        "n        - Edit file name".to_owned(),
        "p        - Go to typed path".to_owned(),
        "/        - Fuzzy search".to_owned(),
        "m        - Cycle files/dirs/any".to_owned(),
        "M        - Toggle multiselection".to_owned(),
        "r        - Refresh".to_owned(),
        "o        - Open/Save".to_owned(),
        "q/Esc    - Cancel".to_owned(),
        "".to_owned(),
        "Press Esc or ? to close".to_owned(),
    ];
    render_popup(f, "Help", &lines, theme);
}

/// Computes the visible window `[start, end)` that keeps `selected` in view.
fn visible_window(selected: usize, len: usize, max_visible: usize) -> (usize, usize) {
    if len <= max_visible {
        return (0, len);
    }
    let start = selected
        .saturating_sub(max_visible / 2)
        .min(len - max_visible);
    (start, start + max_visible)
}
