//! Configuration management.
//!
//! Chooser behaviour, favorites location and modifier keys
//! ([`settings::Config`]) are stored as a TOML file and loaded at startup.

pub mod settings;
