use macroquad::prelude::*;

/// Screen-space translation of the world that keeps `target` centered without
/// showing anything past the map edges.
///
/// On an axis where the map is smaller than the screen the map is centered instead.
pub fn follow(target: Vec2, screen: Vec2, map: Vec2) -> Vec2 {
    let raw = (screen / 2.0 - target).round();
    vec2(
        clamp_axis(raw.x, screen.x, map.x),
        clamp_axis(raw.y, screen.y, map.y),
    )
}

#[inline]
fn clamp_axis(offset: f32, screen: f32, map: f32) -> f32 {
    if map < screen {
        return ((screen - map) / 2.0).round();
    }
    offset.max(screen - map).min(0.0)
}

/// The world rectangle visible through `offset`.
pub fn visible_world_rect(offset: Vec2, screen: Vec2) -> (Vec2, Vec2) {
    (-offset, screen - offset)
}
