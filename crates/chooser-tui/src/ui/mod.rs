//! UI widget modules for the terminal chooser.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod file_name;
pub mod panel;
pub mod popup;
pub mod shortcuts;
pub mod statusbar;
