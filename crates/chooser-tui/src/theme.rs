//! Color theme for the terminal chooser.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use anyhow::Context;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Complete theme with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub shortcuts: ShortcutsTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading theme {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing theme {}", path.display()))
    }

    /// The theme in `path` if it exists and parses, else the default.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("falling back to default theme: {e:#}");
                Self::default()
            }
        }
    }
}

/// File list colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelTheme {
    pub dir_fg: String,
    pub cursor_fg: String,
    /// Entries in the selection.
    pub selected_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            cursor_fg: "yellow".to_string(),
            selected_fg: "green".to_string(),
        }
    }
}

/// Shortcut panel colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutsTheme {
    pub place_fg: String,
    pub favorite_fg: String,
    pub selected_fg: String,
}

impl Default for ShortcutsTheme {
    fn default() -> Self {
        Self {
            place_fg: "cyan".to_string(),
            favorite_fg: "magenta".to_string(),
            selected_fg: "yellow".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub history_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "dark_gray".to_string(),
            position_fg: "white".to_string(),
            history_fg: "cyan".to_string(),
            message_fg: "yellow".to_string(),
        }
    }
}

/// Popup dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
    pub warning_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
            warning_fg: "red".to_string(),
        }
    }
}

/// Parses a color string into a ratatui [`Color`].
///
/// Supports named colors (`"red"`, `"dark_gray"`) and `#rrggbb` hex. Unknown
/// names map to [`Color::Reset`].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}
