use crate::model::{Point, ShapeId};
use crate::shape_store::ShapeStore;

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was selected.
    Nothing,
    /// The listed shapes were removed with their labels.
    Deleted(Vec<ShapeId>),
    /// Several shapes are staged and wait for `confirm_deletion`.
    ConfirmationRequired(usize),
}

/// Shapes staged for removal, waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    shape_ids: Vec<ShapeId>,
}

impl PendingDeletion {
    pub fn new(shape_ids: Vec<ShapeId>) -> Self {
        Self { shape_ids }
    }

    pub fn shape_ids(&self) -> &[ShapeId] {
        &self.shape_ids
    }

    pub fn len(&self) -> usize {
        self.shape_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape_ids.is_empty()
    }

    pub fn into_ids(self) -> Vec<ShapeId> {
        self.shape_ids
    }
}

/// Tracks the active selection and any staged deletion.
///
/// The first id in the selection is the primary object: the one whose
/// colors are read back into the palette when a selection is created.
/// Labels are never selectable.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<ShapeId>,
    pending: Option<PendingDeletion>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_ids(&self) -> &[ShapeId] {
        &self.selected
    }

    pub fn primary(&self) -> Option<ShapeId> {
        self.selected.first().copied()
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Replaces the selection with the interactive, non-label shapes among `ids`.
    pub fn select(&mut self, store: &ShapeStore, ids: &[ShapeId]) {
        self.selected.clear();
        for &id in ids {
            let selectable = store
                .get(id)
                .is_some_and(|s| s.interactive && s.visible && !s.is_label());
            if selectable && !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Selects the topmost selectable shape whose frame contains `point`.
    ///
    /// With `multi`, the hit shape is toggled in the selection instead of
    /// replacing it. Returns the hit shape.
    pub fn select_at(&mut self, store: &ShapeStore, point: &Point, multi: bool) -> Option<ShapeId> {
        let hit = store
            .iter()
            .filter(|s| s.interactive && s.visible && !s.is_label())
            .filter(|s| {
                let (min_x, min_y, max_x, max_y) = s.bounds();
                point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
            })
            .last()
            .map(|s| s.id);

        match (hit, multi) {
            (Some(id), true) => {
                if let Some(pos) = self.selected.iter().position(|&s| s == id) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(id);
                }
            }
            (Some(id), false) => {
                self.selected.clear();
                self.selected.push(id);
            }
            (None, false) => self.selected.clear(),
            (None, true) => {}
        }
        hit
    }

    /// Selects every selectable shape in draw order.
    pub fn select_all(&mut self, store: &ShapeStore) {
        let ids: Vec<ShapeId> = store.draw_order_iter().collect();
        self.select(store, &ids);
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Drops ids that are no longer selectable in `store`.
    pub fn retain_existing(&mut self, store: &ShapeStore) {
        self.selected.retain(|&id| {
            store
                .get(id)
                .is_some_and(|s| s.interactive && s.visible && !s.is_label())
        });
    }

    pub fn remove(&mut self, id: ShapeId) {
        self.selected.retain(|&other| other != id);
    }

    /// Stages the current selection for deletion.
    pub fn stage_deletion(&mut self) -> usize {
        let staged = PendingDeletion::new(self.selected.clone());
        let count = staged.len();
        self.pending = Some(staged);
        count
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    pub fn take_pending(&mut self) -> Option<PendingDeletion> {
        self.pending.take()
    }

    /// Discards any staged deletion. Returns whether one existed.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
