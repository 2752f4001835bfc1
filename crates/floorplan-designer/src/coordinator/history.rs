//! Undo/redo.

use floorplan_core::EditError;

use super::SceneCoordinator;
use crate::surface::RenderSurface;

impl<S: RenderSurface> SceneCoordinator<S> {
    /// Restores the scene before the last committed edit.
    ///
    /// Returns false when there is nothing to undo. A malformed snapshot
    /// aborts the restore, leaves the scene intact and is returned once.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        let result = self.history.undo(&mut self.context);
        self.after_restore(result)
    }

    /// Re-applies the last undone edit. Returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> Result<bool, EditError> {
        let result = self.history.redo(&mut self.context);
        self.after_restore(result)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn after_restore(&mut self, result: Result<(), EditError>) -> Result<bool, EditError> {
        match result {
            Ok(()) => {
                self.drag = None;
                self.selection.cancel_pending();
                self.reload_surface();
                self.is_modified = true;
                Ok(true)
            }
            Err(EditError::EmptyHistory { action }) => {
                tracing::debug!("Nothing to {}", action);
                Ok(false)
            }
            Err(e) => {
                tracing::warn!("History restore failed: {}", e);
                Err(e)
            }
        }
    }
}
