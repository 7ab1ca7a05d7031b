//! File list panel rendering.
//!
//! Renders the listing as a scrollable `List` widget. Entries in the
//! selection carry a `*` marker; the cursor row is reversed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use chooser_core::{Entry, SelectionModel};

use crate::theme::{parse_color, Theme};

/// Data needed to render the file list.
pub struct FileListProps<'a> {
    pub entries: &'a [Entry],
    pub selection: &'a SelectionModel,
    pub cursor: usize,
    pub title: &'a str,
    pub is_active: bool,
}

/// Renders the file list. Directories are shown with a trailing `/` in the
/// directory color; sizes are right of the name for files.
pub fn render_file_list(f: &mut Frame, area: Rect, props: &FileListProps<'_>, theme: &Theme) {
    let cursor_color = parse_color(&theme.panel.cursor_fg);

    let items: Vec<ListItem> = props
        .entries
        .iter()
        .map(|entry| {
            let selected = props.selection.contains(entry.path());
            ListItem::new(entry_line(entry, selected, theme))
        })
        .collect();

    let border_color = if props.is_active {
        cursor_color
    } else {
        Color::DarkGray
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(props.title.to_owned())
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(cursor_color),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !props.entries.is_empty() {
        state.select(Some(props.cursor));
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn entry_line(entry: &Entry, selected: bool, theme: &Theme) -> Line<'static> {
    let marker = if selected {
        Span::styled(
            "* ",
            Style::default()
                .fg(parse_color(&theme.panel.selected_fg))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };

    if entry.is_dir() {
        return Line::from(vec![
            marker,
            Span::styled(format!("{}/", entry.name()), dir_style(theme, selected)),
        ]);
    }

    let name_style = if selected {
        Style::default().fg(parse_color(&theme.panel.selected_fg))
    } else {
        Style::default()
    };

    Line::from(vec![
        marker,
        Span::styled(entry.name().to_owned(), name_style),
        Span::styled(
            format!("  {}", entry.display_size()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn dir_style(theme: &Theme, selected: bool) -> Style {
    let fg = if selected {
        &theme.panel.selected_fg
    } else {
        &theme.panel.dir_fg
    };
    Style::default()
        .fg(parse_color(fg))
        .add_modifier(Modifier::BOLD)
}
