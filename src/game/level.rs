use macroquad::prelude::*;

use crate::atlas::HikerFrames;
use crate::camera;
use crate::character::{Character, HikerClips};
use crate::collection::Collection;
use crate::command::{AssetSource, DrawCommand, Surface, TextureHandle};
use crate::config::{rgb, GameConfig};
use crate::error::GameResult;
use crate::input::{Action, InputState};
use crate::loader::json_loader::{decode_atlas_str, decode_map_str};
use crate::map::{decode, Placement, Tilemap};
use crate::render::query_visible_rect;
use crate::spatial::PlacementIndex;
use crate::tileset::TilesetGrid;

pub const COUNTER_FONT_SIZE: u16 = 24;
const COUNTER_POSITION: Vec2 = Vec2::new(10.0, 10.0);

/// Everything a level needs, already loaded and decoded.
#[derive(Debug)]
pub struct LevelAssets {
    pub tilemap: Tilemap,
    pub tileset: TilesetGrid,
    pub tileset_texture: TextureHandle,
    pub hiker_frames: HikerFrames,
    pub hiker_texture: TextureHandle,
}

impl LevelAssets {
    pub async fn load<A: AssetSource>(assets: &mut A, config: &GameConfig) -> GameResult<Self> {
        let paths = &config.assets;

        let map_json = assets.load_text(&paths.tilemap).await?;
        let tilemap = decode_map_str(&map_json)?;
        tracing::debug!(path = %paths.tilemap, layers = tilemap.layers.len(), "tilemap loaded");

        let tileset_tex = assets.load_texture(&paths.tileset).await?;
        let tileset = TilesetGrid::from_image(config.tile_size, tileset_tex.width, tileset_tex.height)?;

        let atlas_json = assets.load_text(&paths.hiker_atlas).await?;
        let atlas = decode_atlas_str(&atlas_json, &paths.hiker_atlas)?;
        let hiker_frames = HikerFrames::from_atlas(&atlas)?;
        let hiker_tex = assets.load_texture(&atlas.image).await?;

        Ok(Self {
            tilemap,
            tileset,
            tileset_texture: tileset_tex.handle,
            hiker_frames,
            hiker_texture: hiker_tex.handle,
        })
    }
}

/// The playable map: hiker, items, camera and counter.
#[derive(Debug)]
pub struct LevelScreen {
    placements: Vec<Placement>,
    index: PlacementIndex,
    collection: Collection,
    character: Character,
    camera: Vec2,
    map_size: Vec2,
    tile_draw_size: Vec2,
    counter: String,
    tileset_texture: TextureHandle,
    hiker_frames: HikerFrames,
    hiker_texture: TextureHandle,
    hiker_scale: f32,
    move_speed: f32,
    pickup_range: f32,
    background: Color,
    text_color: Color,
}

impl LevelScreen {
    pub fn new(assets: LevelAssets, config: &GameConfig) -> GameResult<Self> {
        let scale = config.render_scale;
        let decoded = decode(&assets.tilemap, &assets.tileset, scale, &config.collectible_layer)?;
        let collection = Collection::new(decoded.items);
        let clips = HikerClips::new(&config.animation)?;

        tracing::info!(
            tiles = decoded.placements.len(),
            trash = collection.total(),
            "level ready"
        );

        Ok(Self {
            placements: decoded.placements,
            index: decoded.index,
            counter: collection.label(),
            collection,
            character: Character::new(config.start_position(), clips),
            camera: Vec2::ZERO,
            map_size: assets.tilemap.pixel_size(scale),
            tile_draw_size: vec2(
                assets.tilemap.tile_width as f32 * scale,
                assets.tilemap.tile_height as f32 * scale,
            ),
            tileset_texture: assets.tileset_texture,
            hiker_frames: assets.hiker_frames,
            hiker_texture: assets.hiker_texture,
            hiker_scale: config.hiker_scale,
            move_speed: config.move_speed,
            pickup_range: config.pickup_range,
            background: rgb(config.colors.level_background),
            text_color: rgb(config.colors.text),
        })
    }

    /// Tries to start a pickup. Out of range or mid-pickup requests are dropped.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Pickup => {
                if !self.character.can_pick_up() {
                    return;
                }
                match self.collection.find_nearby(self.character.position(), self.pickup_range) {
                    Some(item) => {
                        self.character.begin_pickup(item);
                    }
                    None => tracing::trace!("pickup requested with nothing in range"),
                }
            }
        }
    }

    /// Character, then camera, then collection and counter.
    pub fn update(&mut self, input: &InputState, screen: Vec2, dt: f32) {
        let finished = self.character.update(input, self.move_speed, self.map_size, dt);

        self.camera = camera::follow(self.character.position(), screen, self.map_size);

        if let Some(item) = finished {
            if self.collection.collect(item) {
                self.counter = self.collection.label();
            }
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        let screen = surface.screen_size();
        surface.submit(DrawCommand::Clear(self.background));

        let (view_min, view_max) = camera::visible_world_rect(self.camera, screen);
        for idx in query_visible_rect(&self.index, view_min, view_max) {
            let p = &self.placements[idx];
            if p.item.is_some_and(|item| !self.collection.is_visible(item)) {
                continue;
            }
            surface.submit(DrawCommand::Tile {
                texture: self.tileset_texture,
                source: p.source,
                dest: p.dest + self.camera,
                size: self.tile_draw_size,
                flip_h: p.flip_h,
                flip_v: p.flip_v,
            });
        }

        let frame = self.character.animator().current_frame();
        if let Some(source) = self.hiker_frames.get(frame) {
            let sign = self.character.facing().scale_sign();
            surface.submit(DrawCommand::Sprite {
                texture: self.hiker_texture,
                source,
                center: (self.character.position() + self.camera).round(),
                scale: vec2(self.hiker_scale * sign, self.hiker_scale),
            });
        }

        surface.submit(DrawCommand::Text {
            text: self.counter.clone(),
            pos: COUNTER_POSITION,
            font_size: COUNTER_FONT_SIZE,
            scale: 1.0,
            anchor: Vec2::ZERO,
            color: self.text_color,
        });
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn map_size(&self) -> Vec2 {
        self.map_size
    }

    pub fn counter_text(&self) -> &str {
        &self.counter
    }
}
