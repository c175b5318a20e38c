//! The seam between the game core and whatever actually draws and loads things.

use macroquad::prelude::{Color, Rect, Vec2};

use crate::error::GameResult;

/// Opaque handle to a texture owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// A tileset cell drawn with its top-left corner at `dest`.
    Tile {
        texture: TextureHandle,
        source: Rect,
        dest: Vec2,
        size: Vec2,
        flip_h: bool,
        flip_v: bool,
    },
    /// A sprite centered on `center`; negative scale components mirror it.
    Sprite {
        texture: TextureHandle,
        source: Rect,
        center: Vec2,
        scale: Vec2,
    },
    /// Text placed so that `anchor` (0..1 on each axis) of its box sits on `pos`.
    Text {
        text: String,
        pos: Vec2,
        font_size: u16,
        scale: f32,
        anchor: Vec2,
        color: Color,
    },
}

/// A drawing surface.
pub trait Surface {
    fn screen_size(&self) -> Vec2;

    /// Size of `text` rendered at `font_size` with the loaded font.
    fn measure_text(&self, text: &str, font_size: u16) -> Vec2;

    fn submit(&mut self, command: DrawCommand);
}

/// Asynchronous asset access. These are the only suspension points of the game.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn load_text(&mut self, path: &str) -> GameResult<String>;

    /// Loads an image for later drawing. Pixel-art textures use nearest filtering.
    async fn load_texture(&mut self, path: &str) -> GameResult<TextureInfo>;

    /// Loads the font used for every [`DrawCommand::Text`].
    async fn load_font(&mut self, path: &str) -> GameResult<()>;
}
