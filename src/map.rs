use crate::collection::CollectibleItem;
use crate::error::MapError;
use crate::layer::TileLayer;
use crate::spatial::PlacementIndex;
use crate::tileset::TilesetGrid;
use macroquad::prelude::*;

/// A level: equally sized tile layers in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub layers: Vec<TileLayer>,
}

impl Tilemap {
    /// Checks that every layer covers exactly the map grid.
    pub fn validate(&self) -> Result<(), MapError> {
        for layer in &self.layers {
            if layer.width != self.width || layer.height != self.height {
                return Err(MapError::LayerDimensions {
                    layer: layer.name.clone(),
                    width: layer.width,
                    height: layer.height,
                    map_width: self.width,
                    map_height: self.height,
                });
            }
            let expected = (self.width as usize) * (self.height as usize);
            if layer.data.len() != expected {
                return Err(MapError::InvalidLayerSize {
                    layer: layer.name.clone(),
                    expected,
                    actual: layer.data.len(),
                });
            }
        }
        Ok(())
    }

    /// Map size in screen pixels at the given render scale.
    pub fn pixel_size(&self, scale: f32) -> Vec2 {
        vec2(
            (self.width * self.tile_width) as f32 * scale,
            (self.height * self.tile_height) as f32 * scale,
        )
    }

    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// One tile to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub layer: usize,
    pub cell: UVec2,
    pub dest: Vec2,
    pub source: Rect,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Index into [`DecodedMap::items`] when this tile is a collectible.
    pub item: Option<usize>,
}

#[derive(Debug, Default)]
pub struct DecodedMap {
    pub placements: Vec<Placement>,
    pub items: Vec<CollectibleItem>,
    pub index: PlacementIndex,
}

/// Turns every non-empty cell into a [`Placement`] and registers the cells of
/// `collectible_layer` as items.
///
/// Output order is layer order, then row-major within the layer. The map and
/// every tile id are validated first, so a broken level never yields placements.
/// Map tiles must be square and match the tileset's cell size.
pub fn decode(
    map: &Tilemap,
    tileset: &TilesetGrid,
    scale: f32,
    collectible_layer: &str,
) -> Result<DecodedMap, MapError> {
    map.validate()?;

    if map.tile_width != tileset.tile_size || map.tile_height != tileset.tile_size {
        return Err(MapError::TileSizeMismatch {
            tile_width: map.tile_width,
            tile_height: map.tile_height,
            tileset: tileset.tile_size,
        });
    }

    for layer in &map.layers {
        for (index, code) in layer.data.iter().enumerate() {
            let tile_id = crate::spatial::TileCode(*code).tile_id();
            if *code != 0 && !tileset.contains(tile_id) {
                return Err(MapError::InvalidTileId {
                    layer: layer.name.clone(),
                    index,
                    tile_id,
                    tile_count: tileset.tile_count,
                });
            }
        }
    }

    let tw = map.tile_width as f32;
    let th = map.tile_height as f32;
    let mut out = DecodedMap::default();

    for (lz, layer) in map.layers.iter().enumerate() {
        let collectible = layer.name == collectible_layer;

        for (col, row, code) in layer.cells() {
            let dest = vec2(col as f32 * tw * scale, row as f32 * th * scale);

            let item = if collectible {
                let pixel = vec2(col as f32 * tw, row as f32 * th);
                let center = pixel * scale + vec2(tw * scale, th * scale) / 2.0;
                out.items.push(CollectibleItem::new(uvec2(col, row), code.tile_id(), center));
                Some(out.items.len() - 1)
            } else {
                None
            };

            out.index.add(out.placements.len(), dest);
            out.placements.push(Placement {
                layer: lz,
                cell: uvec2(col, row),
                dest,
                source: tileset.source_rect(code.tile_id()),
                flip_h: code.flip_h(),
                flip_v: code.flip_v(),
                item,
            });
        }
    }

    Ok(out)
}
