//! File system abstractions.
//!
//! The [`provider::FileSystem`] and [`places::Places`] collaborators, the
//! listed [`entry::Entry`] type and human readable [`size`] formatting.

pub mod entry;
pub mod places;
pub mod provider;
pub mod size;
