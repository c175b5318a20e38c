use macroquad::prelude::*;

use crate::command::{AssetSource, DrawCommand, Surface, TextureHandle};
use crate::config::{rgb, GameConfig};
use crate::error::GameResult;
use crate::loader::json_loader::decode_atlas_str;

pub const START_LABEL: &str = "START";
pub const START_FONT_SIZE: u16 = 48;
const START_HOVER_SCALE: f32 = 1.1;

/// Static title art plus a START button.
#[derive(Debug)]
pub struct TitleScreen {
    texture: TextureHandle,
    source: Rect,
    scale: f32,
    background: Color,
    text_color: Color,
    button: Rect,
    hovered: bool,
    start_requested: bool,
}

impl TitleScreen {
    /// Loads the title art and lays out the START button for the host's screen.
    pub async fn load<H: AssetSource + Surface>(host: &mut H, config: &GameConfig) -> GameResult<Self> {
        let paths = &config.assets;
        let atlas_json = host.load_text(&paths.title_atlas).await?;
        let atlas = decode_atlas_str(&atlas_json, &paths.title_atlas)?;
        let source = atlas.require(&paths.title_frame)?;
        let texture = host.load_texture(&atlas.image).await?;

        let mut title = Self {
            texture: texture.handle,
            source,
            scale: config.title_scale,
            background: rgb(config.colors.title_background),
            text_color: rgb(config.colors.text),
            button: Rect::new(0.0, 0.0, 0.0, 0.0),
            hovered: false,
            start_requested: false,
        };
        title.layout(&*host);
        Ok(title)
    }

    /// Recomputes the button hit box for the current screen size.
    pub fn layout<S: Surface>(&mut self, surface: &S) {
        let screen = surface.screen_size();
        let size = surface.measure_text(START_LABEL, START_FONT_SIZE);
        let center = start_position(screen);
        self.button = Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y);
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.hovered = self.hit_box().contains(pos);
    }

    pub fn pointer_tapped(&mut self, pos: Vec2) {
        if self.hit_box().contains(pos) {
            tracing::info!("START pressed");
            self.start_requested = true;
        }
    }

    /// Returns `true` once per START press.
    pub fn take_start_request(&mut self) -> bool {
        std::mem::take(&mut self.start_requested)
    }

    pub fn button(&self) -> Rect {
        self.button
    }

    /// The button as drawn: grown around its center while hovered.
    pub fn hit_box(&self) -> Rect {
        if !self.hovered {
            return self.button;
        }
        let size = self.button.size() * START_HOVER_SCALE;
        let center = self.button.center();
        Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        let screen = surface.screen_size();
        surface.submit(DrawCommand::Clear(self.background));
        surface.submit(DrawCommand::Sprite {
            texture: self.texture,
            source: self.source,
            center: (screen / 2.0).round(),
            scale: Vec2::splat(self.scale),
        });
        surface.submit(DrawCommand::Text {
            text: START_LABEL.into(),
            pos: start_position(screen).round(),
            font_size: START_FONT_SIZE,
            scale: if self.hovered { START_HOVER_SCALE } else { 1.0 },
            anchor: vec2(0.5, 0.5),
            color: self.text_color,
        });
    }
}

fn start_position(screen: Vec2) -> Vec2 {
    vec2(screen.x / 2.0, screen.y * 0.9)
}
