//! Snapshot history.
//!
//! The top of the undo stack is always the snapshot of the live scene. Undo
//! moves that entry onto the redo stack and restores the one below it; redo
//! moves it back. Appending a new snapshot discards the redo stack. Entries
//! are moved between stacks, never copied.

use floorplan_core::EditError;
use std::fmt;

/// Serialized copy of a whole scene.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State that can be captured into and replaced from a [`Snapshot`].
///
/// `restore` must leave the state untouched when it fails.
pub trait Snapshottable {
    fn capture(&self) -> Result<Snapshot, EditError>;
    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), EditError>;
}

#[derive(Debug)]
pub struct HistoryStore {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: usize,
}

impl HistoryStore {
    /// Creates an empty history holding at most `limit` undo entries (at least 2).
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(2),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pushes a snapshot of the live scene and clears the redo stack.
    pub fn append(&mut self, snapshot: Snapshot) {
        self.redo_stack.clear();
        self.push_undo(snapshot);
        tracing::debug!(
            "History append ({} bytes, depth {})",
            self.undo_stack.last().map_or(0, Snapshot::len),
            self.undo_stack.len()
        );
    }

    /// Captures `target` and appends the result.
    pub fn record<T: Snapshottable + ?Sized>(&mut self, target: &T) -> Result<(), EditError> {
        let snapshot = target.capture()?;
        self.append(snapshot);
        Ok(())
    }

    /// Restores the state before the last committed edit.
    pub fn undo<T: Snapshottable + ?Sized>(&mut self, target: &mut T) -> Result<(), EditError> {
        if self.undo_stack.len() < 2 {
            return Err(EditError::EmptyHistory { action: "undo" });
        }
        let Some(current) = self.undo_stack.pop() else {
            return Err(EditError::EmptyHistory { action: "undo" });
        };
        let restored = match self.undo_stack.last() {
            Some(previous) => target.restore(previous),
            None => Err(EditError::EmptyHistory { action: "undo" }),
        };
        match restored {
            Ok(()) => {
                self.redo_stack.push(current);
                tracing::debug!(
                    "Undo (undo depth {}, redo depth {})",
                    self.undo_stack.len(),
                    self.redo_stack.len()
                );
                Ok(())
            }
            Err(e) => {
                self.undo_stack.push(current);
                Err(e)
            }
        }
    }

    /// Re-applies the most recently undone edit.
    pub fn redo<T: Snapshottable + ?Sized>(&mut self, target: &mut T) -> Result<(), EditError> {
        let Some(next) = self.redo_stack.pop() else {
            return Err(EditError::EmptyHistory { action: "redo" });
        };
        match target.restore(&next) {
            Ok(()) => {
                self.push_undo(next);
                tracing::debug!(
                    "Redo (undo depth {}, redo depth {})",
                    self.undo_stack.len(),
                    self.redo_stack.len()
                );
                Ok(())
            }
            Err(e) => {
                self.redo_stack.push(next);
                Err(e)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshot of the live scene, if any has been recorded.
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Drops both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(floorplan_core::constants::DEFAULT_HISTORY_LIMIT)
    }
}
