use macroquad::prelude::*;
use std::collections::HashMap;

pub const CHUNK_SIZE: i32 = 256;

/// A raw cell value from a tile layer: tileset index plus flip flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

pub const FLIP_H: u32 = 0x8000_0000; // bit 31
pub const FLIP_V: u32 = 0x4000_0000; // bit 30
pub const TILE_ID_MASK: u32 = 0x1FFF_FFFF; // lower 29 bits

impl TileCode {
    #[inline] pub fn tile_id(self) -> u32 { self.0 & TILE_ID_MASK }
    #[inline] pub fn flip_h(self) -> bool { (self.0 & FLIP_H) != 0 }
    #[inline] pub fn flip_v(self) -> bool { (self.0 & FLIP_V) != 0 }
}

#[inline]
pub fn world_to_chunk(p: Vec2) -> ChunkCoord {
    ChunkCoord {
        x: (p.x.floor() as i32).div_euclid(CHUNK_SIZE),
        y: (p.y.floor() as i32).div_euclid(CHUNK_SIZE),
    }
}

/// Buckets placement indices by the chunk their top-left corner falls in.
#[derive(Debug, Default)]
pub struct PlacementIndex {
    pub buckets: HashMap<ChunkCoord, Vec<usize>>,
    len: usize,
}

impl PlacementIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, placement: usize, world: Vec2) {
        let cc = world_to_chunk(world);
        self.buckets.entry(cc).or_default().push(placement);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_code_splits_flags_from_id() {
        let code = TileCode(FLIP_H | FLIP_V | 42);
        assert_eq!(code.tile_id(), 42);
        assert!(code.flip_h());
        assert!(code.flip_v());

        let plain = TileCode(7);
        assert!(!plain.flip_h());
        assert!(!plain.flip_v());
    }

    #[test]
    fn negative_positions_land_in_negative_chunks() {
        assert_eq!(world_to_chunk(vec2(-1.0, 0.0)), ChunkCoord { x: -1, y: 0 });
        assert_eq!(world_to_chunk(vec2(255.0, 256.0)), ChunkCoord { x: 0, y: 1 });
    }
}
