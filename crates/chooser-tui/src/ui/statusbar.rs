//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, back/forward availability, the selection and
//! chooser modes, and an optional status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use chooser_core::SelectionMode;

use crate::theme::{parse_color, Theme};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub cursor: usize,
    pub selected_count: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub selection_mode: SelectionMode,
    pub multiselection: bool,
    pub status_message: Option<&'a str>,
}

pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let history_fg = parse_color(&theme.statusbar.history_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let position = if props.entry_count > 0 {
        format!(" {}/{}", props.cursor + 1, props.entry_count)
    } else {
        " 0/0".to_owned()
    };

    let selected = if props.selected_count > 0 {
        format!("  {} selected", props.selected_count)
    } else {
        String::new()
    };

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            history_indicator(props.can_go_back, props.can_go_forward),
            Style::default().fg(history_fg).bg(bg),
        ),
        Span::styled(
            mode_indicator(props.selection_mode, props.multiselection),
            Style::default().fg(position_fg).bg(bg),
        ),
        Span::styled(selected, Style::default().fg(position_fg).bg(bg)),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

/// `[<>]` style marker; a `-` stands for an unavailable direction.
fn history_indicator(back: bool, forward: bool) -> String {
    let back = if back { '<' } else { '-' };
    let forward = if forward { '>' } else { '-' };
    format!("  [{back}{forward}]")
}

fn mode_indicator(mode: SelectionMode, multiselection: bool) -> String {
    let mode = match mode {
        SelectionMode::Files => "files",
        SelectionMode::Directories => "dirs",
        SelectionMode::FilesAndDirectories => "any",
    };
    let multi = if multiselection { "+multi" } else { "" };
    format!("  [{mode}{multi}]")
}
