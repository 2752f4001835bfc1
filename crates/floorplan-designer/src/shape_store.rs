use crate::model::{FloorShape, ShapeId};
use std::collections::HashMap;

/// Owns every object in the scene and remembers draw order.
///
/// Objects are stored by id; `draw_order` lists ids bottom to top. Ids are
/// never reused within a store, even after removal.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, FloorShape>,
    draw_order: Vec<ShapeId>,
    next_id: ShapeId,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh id.
    pub fn generate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn next_id(&self) -> ShapeId {
        self.next_id
    }

    pub fn set_next_id(&mut self, id: ShapeId) {
        self.next_id = id;
    }

    /// Inserts on top of the draw order. Replacing an existing id keeps its position.
    pub fn insert(&mut self, shape: FloorShape) {
        let id = shape.id;
        if self.shapes.insert(id, shape).is_none() {
            self.draw_order.push(id);
        }
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<FloorShape> {
        let removed = self.shapes.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        Some(removed)
    }

    pub fn get(&self, id: ShapeId) -> Option<&FloorShape> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut FloorShape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Objects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &FloorShape> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FloorShape> {
        self.shapes.values_mut()
    }

    pub fn draw_order_iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.draw_order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
