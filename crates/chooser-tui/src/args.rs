//! Command-line arguments.
//!
//! Flags override the matching `[chooser]` settings of the config file.

use std::path::PathBuf;

use chooser_core::config::settings::Config;
use chooser_core::{ChooserMode, SelectionMode};
use clap::Parser;

/// Pick files or directories and print the chosen paths, one per line.
#[derive(Debug, Default, PartialEq, Eq, Parser)]
#[command(
    name = "chooser",
    version,
    after_help = "Exits with status 1 when the dialog is cancelled."
)]
pub struct Args {
    /// Choose existing entries (default)
    #[arg(long, group = "chooser_mode")]
    pub open: bool,

    /// Choose a location to save to
    #[arg(long, group = "chooser_mode")]
    pub save: bool,

    /// Only files may be chosen (default)
    #[arg(long, group = "selection")]
    pub files: bool,

    /// Only directories may be chosen
    #[arg(long, group = "selection")]
    pub dirs: bool,

    /// Files and directories may be chosen
    #[arg(long, group = "selection")]
    pub any: bool,

    /// Allow selecting several entries
    #[arg(long)]
    pub multi: bool,

    /// Only list files with these extensions (e.g. png,jpg)
    #[arg(long = "ext", value_name = "LIST", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Read configuration from PATH
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to start in
    pub start_dir: Option<PathBuf>,
}

impl Args {
    pub fn mode(&self) -> Option<ChooserMode> {
        match (self.open, self.save) {
            (_, true) => Some(ChooserMode::Save),
            (true, _) => Some(ChooserMode::Open),
            _ => None,
        }
    }

    pub fn selection_mode(&self) -> Option<SelectionMode> {
        if self.any {
            Some(SelectionMode::FilesAndDirectories)
        } else if self.dirs {
            Some(SelectionMode::Directories)
        } else if self.files {
            Some(SelectionMode::Files)
        } else {
            None
        }
    }

    /// `--ext` values, trimmed, with empty items dropped.
    pub fn extensions(&self) -> Option<Vec<String>> {
        self.extensions.as_ref().map(|list| {
            list.iter()
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Writes the flags that were given into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode() {
            config.chooser.mode = mode;
        }
        if let Some(selection_mode) = self.selection_mode() {
            config.chooser.selection_mode = selection_mode;
        }
        if self.multi {
            config.chooser.multiselection = true;
        }
        if let Some(extensions) = self.extensions() {
            config.chooser.extensions = extensions;
        }
        if let Some(dir) = &self.start_dir {
            config.chooser.start_dir = Some(dir.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("chooser").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_is_default() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn flags_and_start_dir() {
        let args = parse(&["--save", "--dirs", "--multi", "/srv"]).unwrap();
        assert_eq!(args.mode(), Some(ChooserMode::Save));
        assert_eq!(args.selection_mode(), Some(SelectionMode::Directories));
        assert!(args.multi);
        assert_eq!(args.start_dir, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn ext_list_is_split_and_trimmed() {
        let args = parse(&["--ext", "png, jpg,,gif"]).unwrap();
        assert_eq!(
            args.extensions(),
            Some(vec!["png".to_string(), "jpg".to_string(), "gif".to_string()])
        );
    }

    #[test]
    fn missing_option_value_is_error() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--ext"]).is_err());
    }

    #[test]
    fn unknown_option_is_error() {
        assert!(parse(&["--delete"]).is_err());
    }

    #[test]
    fn second_start_dir_is_error() {
        assert!(parse(&["/a", "/b"]).is_err());
    }

    #[test]
    fn conflicting_modes_are_rejected() {
        assert!(parse(&["--open", "--save"]).is_err());
        assert!(parse(&["--files", "--any"]).is_err());
    }

    #[test]
    fn apply_overrides_only_given_flags() {
        let mut config = Config::default();
        config.chooser.multiselection = true;
        config.chooser.extensions = vec!["txt".to_string()];

        parse(&["--any"]).unwrap().apply(&mut config);

        assert_eq!(config.chooser.selection_mode, SelectionMode::FilesAndDirectories);
        assert_eq!(config.chooser.mode, ChooserMode::Open);
        assert!(config.chooser.multiselection);
        assert_eq!(config.chooser.extensions, vec!["txt".to_string()]);
    }

    #[test]
    fn apply_sets_start_dir() {
        let mut config = Config::default();
        parse(&["--save", "/tmp"]).unwrap().apply(&mut config);
        assert_eq!(config.chooser.mode, ChooserMode::Save);
        assert_eq!(config.chooser.start_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
