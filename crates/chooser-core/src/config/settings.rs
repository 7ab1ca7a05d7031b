//! Chooser configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::mode::{ChooserMode, SelectionMode};

/// Top-level configuration.
///
/// All fields have defaults so the chooser works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub chooser: ChooserConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Favorites file: the configured path, or `favorites.toml` inside
    /// `config_dir`.
    pub fn favorites_path(&self, config_dir: &Path) -> PathBuf {
        self.favorites
            .path
            .clone()
            .unwrap_or_else(|| config_dir.join("favorites.toml"))
    }
}

/// `~/.config/chooser`, or `$XDG_CONFIG_HOME/chooser` when set.
pub fn default_config_dir() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("/"))
        .join("chooser")
}

/// Behaviour of the chooser itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChooserConfig {
    #[serde(default)]
    pub mode: ChooserMode,
    #[serde(default)]
    pub selection_mode: SelectionMode,
    #[serde(default)]
    pub multiselection: bool,
    /// Initial directory; the home directory when unset.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    /// Extension whitelist. Empty means no extension filtering.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Favorites persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoritesConfig {
    /// Key the list is stored under; choosers with different keys keep
    /// separate favorites in the same file.
    #[serde(default = "default_favorites_key")]
    pub key: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            key: default_favorites_key(),
            path: None,
        }
    }
}

/// A modifier key a front end may map to a selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    Ctrl,
    Shift,
    Alt,
}

/// Which modifiers trigger toggle and range selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeysConfig {
    #[serde(default = "default_multiselect_key")]
    pub multiselect: ModifierKey,
    #[serde(default = "default_group_multiselect_key")]
    pub group_multiselect: ModifierKey,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            multiselect: default_multiselect_key(),
            group_multiselect: default_group_multiselect_key(),
        }
    }
}

fn default_favorites_key() -> String {
    "default".to_string()
}

fn default_multiselect_key() -> ModifierKey {
    ModifierKey::Ctrl
}

fn default_group_multiselect_key() -> ModifierKey {
    ModifierKey::Shift
}
