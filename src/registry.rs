//! Brick Registry
//!
//! The authoritative collection of all currently-placed bricks. Lookup is
//! by brick id and, between batch rebuilds, by batch slot. The slot mapping
//! is rebuilt in full on every registry mutation; it is never patched.

use crate::brick::Brick;

/// Live set of placed bricks.
#[derive(Debug, Default)]
pub struct BrickRegistry {
    bricks: Vec<Brick>,
}

impl BrickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, brick: Brick) {
        self.bricks.push(brick);
    }

    /// Remove the brick with the given id, returning it. `None` when no
    /// such brick is live.
    pub fn remove_by_id(&mut self, id: u32) -> Option<Brick> {
        let index = self.bricks.iter().position(|b| b.id() == id)?;
        Some(self.bricks.remove(index))
    }

    /// Empty the set, returning how many bricks were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.bricks.len();
        self.bricks.clear();
        removed
    }

    pub fn get(&self, id: u32) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Brick> {
        self.bricks.iter_mut().find(|b| b.id() == id)
    }

    /// Find the brick a batch slot represents. O(n) is fine here; the only
    /// caller is the batch refresh pass.
    pub fn get_by_batch_slot(&self, slot: u32) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.batch_slot == Some(slot))
    }

    pub fn count(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::Rotation;
    use crate::palette::BrickColor;
    use glam::Vec3;

    fn brick(id: u32, x: f32) -> Brick {
        Brick::new(
            id,
            1,
            1,
            1,
            Vec3::new(x, 0.0, 0.0),
            Rotation::Deg0,
            BrickColor::Default,
        )
        .unwrap()
    }

    #[test]
    fn insert_and_lookup_by_id() {
        let mut registry = BrickRegistry::new();
        registry.insert(brick(1, 0.0));
        registry.insert(brick(2, 1.0));
        assert_eq!(registry.count(), 2);
        assert!(registry.get(1).is_some());
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn remove_by_id_returns_brick_once() {
        let mut registry = BrickRegistry::new();
        registry.insert(brick(5, 0.0));
        assert!(registry.remove_by_id(5).is_some());
        assert!(registry.remove_by_id(5).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn batch_slot_lookup() {
        let mut registry = BrickRegistry::new();
        registry.insert(brick(1, 0.0));
        registry.insert(brick(2, 1.0));
        for (slot, b) in registry.iter_mut().enumerate() {
            b.batch_slot = Some(slot as u32);
        }
        assert_eq!(registry.get_by_batch_slot(1).map(|b| b.id()), Some(2));
        assert!(registry.get_by_batch_slot(9).is_none());
    }
}
