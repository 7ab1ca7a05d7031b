//! User-visible strings.
//!
//! The core never renders anything itself, but it decides *which* message a
//! front end should show (titles, dialog texts, shortcut labels). Front ends
//! may translate by matching on [`ChooserText`] instead of using
//! [`ChooserText::as_str`].

use std::fmt;

/// Every string the chooser may ask a front end to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChooserText {
    TitleChooseFiles,
    TitleChooseDirectories,
    TitleChooseFilesAndDirectories,
    Open,
    Save,
    Cancel,
    FileName,
    Desktop,
    Computer,
    AddToFavorites,
    RemoveFromFavorites,
    PopupTitle,
    PopupOnlyDirectories,
    PopupChooseFile,
    PopupDirectoryDoesNotExist,
    PopupFilenameInvalid,
    PopupFileExistOverwrite,
    PopupMultipleFileExistOverwrite,
    Yes,
    No,
    Ok,
}

impl ChooserText {
    /// Default English rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TitleChooseFiles => "Choose files",
            Self::TitleChooseDirectories => "Choose directories",
            Self::TitleChooseFilesAndDirectories => "Choose files and directories",
            Self::Open => "Open",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
            Self::FileName => "File name:",
            Self::Desktop => "Desktop",
            Self::Computer => "Computer",
            Self::AddToFavorites => "Add to favorites",
            Self::RemoveFromFavorites => "Remove from favorites",
            Self::PopupTitle => "Message",
            Self::PopupOnlyDirectories => "Only directories are allowed.",
            Self::PopupChooseFile => "You must choose a file!",
            Self::PopupDirectoryDoesNotExist => "This directory does not exist!",
            Self::PopupFilenameInvalid => "Invalid file name",
            Self::PopupFileExistOverwrite => "This file already exists, do you want to overwrite it?",
            Self::PopupMultipleFileExistOverwrite => {
                "These files already exist, do you want to overwrite them?"
            }
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for ChooserText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
