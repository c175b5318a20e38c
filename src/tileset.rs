use crate::error::MapError;
use macroquad::prelude::Rect;

/// A tileset image cut into square cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilesetGrid {
    pub tile_size: u32,
    pub columns: u32,
    pub tile_count: u32,
}

impl TilesetGrid {
    /// Derives the grid from the tileset image size.
    pub fn from_image(tile_size: u32, image_width: u32, image_height: u32) -> Result<Self, MapError> {
        if tile_size == 0 {
            return Err(MapError::InvalidTileset("tile size must be non-zero".into()));
        }
        let columns = image_width / tile_size;
        let rows = image_height / tile_size;
        if columns == 0 || rows == 0 {
            return Err(MapError::InvalidTileset(format!(
                "{image_width}x{image_height} image is smaller than one {tile_size}px tile"
            )));
        }

        Ok(TilesetGrid {
            tile_size,
            columns,
            tile_count: columns * rows,
        })
    }

    /// Source rectangle of a 1-based tile id.
    pub fn source_rect(&self, tile_id: u32) -> Rect {
        let local = tile_id - 1;
        let size = self.tile_size as f32;
        Rect::new(
            ((local % self.columns) * self.tile_size) as f32,
            ((local / self.columns) * self.tile_size) as f32,
            size,
            size,
        )
    }

    #[inline]
    pub fn contains(&self, tile_id: u32) -> bool {
        tile_id >= 1 && tile_id <= self.tile_count
    }
}
