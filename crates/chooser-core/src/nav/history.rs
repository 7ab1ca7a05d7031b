//! Navigation history with back/forward support.

use std::path::{Path, PathBuf};

/// How a navigation interacts with the history stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPolicy {
    /// Push the current directory onto `back` and clear `forward`.
    AddToHistory,
    /// Clear both stacks after switching (initial directory, explicit jumps).
    ReplaceHistory,
    /// Leave the stacks alone; used by back/forward replays.
    ReplayHistory,
}

/// Immutable navigation history with back/forward stacks.
///
/// Every mutation returns a **new** `HistoryStack`. The current directory is
/// not stored here; it is owned by the navigation controller and passed in
/// when stepping back or forward. Pushing a new location clears the forward
/// stack (same semantics as a web browser).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStack {
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
}

impl HistoryStack {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `previous` on the back stack and clears the forward stack.
    #[must_use]
    pub fn push(&self, previous: PathBuf) -> Self {
        let mut back = self.back.clone();
        back.push(previous);
        Self {
            back,
            forward: Vec::new(),
        }
    }

    /// Steps back from `current`.
    ///
    /// Returns the new history and the directory to replay, or `None` if the
    /// back stack is empty. `current` moves onto the forward stack.
    pub fn go_back(&self, current: &Path) -> Option<(Self, PathBuf)> {
        let mut back = self.back.clone();
        let target = back.pop()?;
        let mut forward = self.forward.clone();
        forward.push(current.to_path_buf());
        Some((Self { back, forward }, target))
    }

    /// Steps forward from `current`. Mirror of [`HistoryStack::go_back`].
    pub fn go_forward(&self, current: &Path) -> Option<(Self, PathBuf)> {
        let mut forward = self.forward.clone();
        let target = forward.pop()?;
        let mut back = self.back.clone();
        back.push(current.to_path_buf());
        Some((Self { back, forward }, target))
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Returns `true` if there is at least one entry on the forward stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Back stack, oldest first.
    pub fn back(&self) -> &[PathBuf] {
        &self.back
    }

    /// Forward stack, oldest first (the next forward target is last).
    pub fn forward(&self) -> &[PathBuf] {
        &self.forward
    }
}
