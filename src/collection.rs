//! Proximity-based pickup of collectible items.

use macroquad::prelude::*;

/// A piece of trash placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectibleItem {
    pub cell: UVec2,
    pub tile_id: u32,
    /// World-space center of the item's tile.
    pub center: Vec2,
    visible: bool,
}

impl CollectibleItem {
    pub fn new(cell: UVec2, tile_id: u32, center: Vec2) -> Self {
        Self {
            cell,
            tile_id,
            center,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// First visible item, in registration order, strictly closer than `range`.
pub fn find_nearby(position: Vec2, items: &[CollectibleItem], range: f32) -> Option<usize> {
    items
        .iter()
        .position(|item| item.visible && item.center.distance(position) < range)
}

/// Owns the level's items and the collected counter.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<CollectibleItem>,
    collected: usize,
}

impl Collection {
    pub fn new(items: Vec<CollectibleItem>) -> Self {
        Self { items, collected: 0 }
    }

    pub fn find_nearby(&self, position: Vec2, range: f32) -> Option<usize> {
        find_nearby(position, &self.items, range)
    }

    /// Hides the item and counts it. Returns `false` if it was already gone.
    pub fn collect(&mut self, item: usize) -> bool {
        match self.items.get_mut(item) {
            Some(it) if it.visible => {
                it.visible = false;
                self.collected += 1;
                tracing::debug!(item, collected = self.collected, total = self.items.len(), "collected trash");
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, item: usize) -> bool {
        self.items.get(item).is_some_and(|it| it.visible)
    }

    pub fn items(&self) -> &[CollectibleItem] {
        &self.items
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn label(&self) -> String {
        format!("Trash: {}/{}", self.collected, self.items.len())
    }
}
