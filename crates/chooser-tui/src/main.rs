//! chooser: a terminal file and directory chooser built with ratatui.
//!
//! This binary initialises the terminal, runs the event loop until the user
//! confirms or cancels, restores the terminal, and prints the chosen paths
//! one per line on stdout.

mod app;
mod args;
mod input;
mod render;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use chooser_core::config::settings::default_config_dir;
use chooser_core::{Config, CoreError, FileChooser, StdFileSystem};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Finish};
use crate::args::Args;
use crate::input::handle_key;
use crate::render::render;
use crate::theme::Theme;

const LOG_ENV: &str = "CHOOSER_LOG";

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs to `chooser.log` in the temp directory so output never mixes with
/// the UI or with the chosen paths on stdout. `CHOOSER_LOG` takes an
/// env-filter directive and defaults to `info`.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("chooser.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}

/// Reads the config file. A missing file at the default location means
/// defaults; a missing file the user named explicitly is an error.
fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    let path = explicit
        .cloned()
        .unwrap_or_else(|| default_config_dir().join("config.toml"));

    match Config::load(&path) {
        Ok(config) => Ok(config),
        Err(CoreError::NotFound(_)) if explicit.is_none() => {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e).with_context(|| format!("loading config {}", path.display())),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let mut config = load_config(args.config.as_ref())?;
    args.apply(&mut config);

    let chooser = FileChooser::<StdFileSystem>::from_config(&config)
        .context("opening the start directory")?;
    let theme = Theme::load_or_default(&default_config_dir().join("theme.toml"));
    let mut app = App::new(chooser, config.keys.clone(), theme);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result?;

    match app.finished() {
        Some(Finish::Chosen(paths)) => {
            for path in paths {
                println!("{}", path.display());
            }
            Ok(())
        }
        _ => std::process::exit(1),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.drain_events();
        if app.finished().is_some() {
            return Ok(());
        }

        terminal.draw(|f| render(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = handle_key(key, app.mode(), app.focus(), app.keys());
            app.apply(action);
        }
    }
}
