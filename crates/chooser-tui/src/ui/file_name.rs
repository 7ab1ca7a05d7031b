//! File-name field and the confirm/cancel button labels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chooser_core::ChooserText;

use crate::theme::{parse_color, Theme};

/// Data needed to render the file-name row.
pub struct FileNameProps<'a> {
    pub text: &'a str,
    /// The field currently has keyboard focus.
    pub editing: bool,
    /// Open or Save.
    pub confirm_label: ChooserText,
}

pub fn render_file_name(f: &mut Frame, area: Rect, props: &FileNameProps<'_>, theme: &Theme) {
    let buttons = button_text(props.confirm_label);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(buttons.chars().count() as u16 + 2),
        ])
        .split(area);

    let border_fg = if props.editing {
        parse_color(&theme.panel.cursor_fg)
    } else {
        parse_color(&theme.popup.border_fg)
    };
    let cursor = if props.editing { "_" } else { "" };

    let field = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", ChooserText::FileName),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}{cursor}", props.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_fg)),
    );
    f.render_widget(field, chunks[0]);

    let buttons = Paragraph::new(buttons).block(Block::default().borders(Borders::ALL));
    f.render_widget(buttons, chunks[1]);
}

fn button_text(confirm_label: ChooserText) -> String {
    format!("[o] {confirm_label}  [q] {}", ChooserText::Cancel)
}
