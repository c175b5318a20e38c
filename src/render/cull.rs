use crate::spatial::{ChunkCoord, PlacementIndex, CHUNK_SIZE};
use macroquad::prelude::*;

const CULL_MARGIN_CHUNKS: i32 = 1;

pub fn visible_chunk_coords_rect(view_min: Vec2, view_max: Vec2) -> (ChunkCoord, ChunkCoord) {
    let mut cx_min = (view_min.x.floor() as i32).div_euclid(CHUNK_SIZE);
    let mut cy_min = (view_min.y.floor() as i32).div_euclid(CHUNK_SIZE);
    let mut cx_max = (view_max.x.floor() as i32).div_euclid(CHUNK_SIZE);
    let mut cy_max = (view_max.y.floor() as i32).div_euclid(CHUNK_SIZE);

    if cx_min > cx_max {
        std::mem::swap(&mut cx_min, &mut cx_max);
    }
    if cy_min > cy_max {
        std::mem::swap(&mut cy_min, &mut cy_max);
    }

    // pad by one chunk so tiles straddling the edge are kept
    (
        ChunkCoord { x: cx_min - CULL_MARGIN_CHUNKS, y: cy_min - CULL_MARGIN_CHUNKS },
        ChunkCoord { x: cx_max + CULL_MARGIN_CHUNKS, y: cy_max + CULL_MARGIN_CHUNKS },
    )
}

/// Placements in chunks overlapping the view, in placement order.
pub fn query_visible_rect(index: &PlacementIndex, view_min: Vec2, view_max: Vec2) -> Vec<usize> {
    let (lo, hi) = visible_chunk_coords_rect(view_min, view_max);

    let mut visible: Vec<usize> = index
        .buckets
        .iter()
        .filter(|(c, _)| c.x >= lo.x && c.x <= hi.x && c.y >= lo.y && c.y <= hi.y)
        .flat_map(|(_, bucket)| bucket.iter().copied())
        .collect();
    visible.sort_unstable();
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_visible_rect_keeps_draw_order() {
        let mut index = PlacementIndex::new();
        index.add(0, vec2(520.0, 520.0)); // (2,2)
        index.add(1, vec2(0.0, 0.0)); // (0,0)
        index.add(2, vec2(260.0, 0.0)); // (1,0)
        index.add(3, vec2(0.0, 260.0)); // (0,1)

        let visible = query_visible_rect(&index, vec2(0.0, 0.0), vec2(800.0, 800.0));

        assert_eq!(visible, vec![0, 1, 2, 3]);
    }

    #[test]
    fn far_chunks_are_culled() {
        let mut index = PlacementIndex::new();
        index.add(0, vec2(10.0, 10.0));
        index.add(1, vec2(4000.0, 4000.0));
        index.add(2, vec2(300.0, 10.0)); // inside the one-chunk margin

        let visible = query_visible_rect(&index, vec2(0.0, 0.0), vec2(100.0, 100.0));

        assert_eq!(visible, vec![0, 2]);
    }
}
