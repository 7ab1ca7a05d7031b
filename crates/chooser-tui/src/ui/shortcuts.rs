//! Shortcut panel: desktop, home, roots and favorites.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use chooser_core::{Shortcut, ShortcutKind};

use crate::theme::{parse_color, Theme};

/// Data needed to render the shortcut panel.
pub struct ShortcutsProps<'a> {
    pub shortcuts: &'a [Shortcut],
    pub cursor: usize,
    /// The shortcut currently in the selection slot.
    pub selected: Option<&'a Shortcut>,
    pub is_active: bool,
}

pub fn render_shortcuts(f: &mut Frame, area: Rect, props: &ShortcutsProps<'_>, theme: &Theme) {
    let items: Vec<ListItem> = props
        .shortcuts
        .iter()
        .map(|shortcut| {
            let is_selected = props.selected == Some(shortcut);
            ListItem::new(shortcut_line(shortcut, is_selected, theme))
        })
        .collect();

    let highlight = parse_color(&theme.panel.cursor_fg);
    let border_color = if props.is_active {
        highlight
    } else {
        Color::DarkGray
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Places")
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(if props.is_active {
            Style::default().add_modifier(Modifier::REVERSED).fg(highlight)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    if props.is_active && !props.shortcuts.is_empty() {
        state.select(Some(props.cursor));
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn shortcut_line(shortcut: &Shortcut, is_selected: bool, theme: &Theme) -> Line<'static> {
    let (icon, fg) = match shortcut.kind() {
        ShortcutKind::Favorite => ("★ ", &theme.shortcuts.favorite_fg),
        ShortcutKind::Root => ("⛁ ", &theme.shortcuts.place_fg),
        ShortcutKind::Desktop | ShortcutKind::Home => ("⌂ ", &theme.shortcuts.place_fg),
    };

    let mut style = Style::default().fg(parse_color(fg));
    if is_selected {
        style = style
            .fg(parse_color(&theme.shortcuts.selected_fg))
            .add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(icon, style),
        Span::styled(shortcut.label().to_owned(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn favorite_uses_star_icon() {
        let shortcut = Shortcut::new(PathBuf::from("/srv/music"), "music", ShortcutKind::Favorite);
        let line = shortcut_line(&shortcut, false, &Theme::default());
        assert_eq!(line.spans[0].content, "★ ");
        assert_eq!(line.spans[1].content, "music");
    }

    #[test]
    fn selected_shortcut_is_bold() {
        let shortcut = Shortcut::new(PathBuf::from("/"), "Computer", ShortcutKind::Root);
        let line = shortcut_line(&shortcut, true, &Theme::default());
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
