//! Macroquad implementation of the drawing surface, asset loading and raw input.

use macroquad::prelude::*;

use crate::command::{AssetSource, DrawCommand, Surface, TextureHandle, TextureInfo};
use crate::error::{GameError, GameResult};
use crate::input::{
    InputEvent, KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP, KEY_DOWN, KEY_LEFT,
    KEY_PICKUP, KEY_RIGHT, KEY_UP,
};

#[derive(Default)]
pub struct MacroquadHost {
    textures: Vec<Texture2D>,
    font: Option<Font>,
    last_mouse: Option<Vec2>,
}

impl MacroquadHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates this frame's keyboard, touch and mouse state into events.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for key in get_keys_pressed() {
            if let Some(name) = key_name(key) {
                events.push(InputEvent::KeyDown(name.to_owned()));
            }
        }
        for key in get_keys_released() {
            if let Some(name) = key_name(key) {
                events.push(InputEvent::KeyUp(name.to_owned()));
            }
        }

        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => events.push(InputEvent::TouchStart(touch.position)),
                TouchPhase::Moved => events.push(InputEvent::TouchMove(touch.position)),
                TouchPhase::Ended | TouchPhase::Cancelled => events.push(InputEvent::TouchEnd),
                TouchPhase::Stationary => {}
            }
        }

        let mouse = Vec2::from(mouse_position());
        if self.last_mouse != Some(mouse) {
            self.last_mouse = Some(mouse);
            events.push(InputEvent::PointerMove(mouse));
        }
        if is_mouse_button_released(MouseButton::Left) {
            events.push(InputEvent::PointerTap(mouse));
        }

        events
    }

    fn texture(&self, handle: TextureHandle) -> Option<&Texture2D> {
        self.textures.get(handle.0 as usize)
    }
}

fn key_name(key: KeyCode) -> Option<&'static str> {
    Some(match key {
        KeyCode::W => KEY_UP,
        KeyCode::A => KEY_LEFT,
        KeyCode::S => KEY_DOWN,
        KeyCode::D => KEY_RIGHT,
        KeyCode::Up => KEY_ARROW_UP,
        KeyCode::Left => KEY_ARROW_LEFT,
        KeyCode::Down => KEY_ARROW_DOWN,
        KeyCode::Right => KEY_ARROW_RIGHT,
        KeyCode::Space => KEY_PICKUP,
        _ => return None,
    })
}

impl AssetSource for MacroquadHost {
    async fn load_text(&mut self, path: &str) -> GameResult<String> {
        tracing::debug!(path, "loading text");
        load_string(path).await.map_err(|e| GameError::asset(path, e))
    }

    async fn load_texture(&mut self, path: &str) -> GameResult<TextureInfo> {
        tracing::debug!(path, "loading texture");
        let tex = load_texture(path).await.map_err(|e| GameError::asset(path, e))?;
        tex.set_filter(FilterMode::Nearest);

        let info = TextureInfo {
            handle: TextureHandle(self.textures.len() as u32),
            width: tex.width() as u32,
            height: tex.height() as u32,
        };
        self.textures.push(tex);
        Ok(info)
    }

    async fn load_font(&mut self, path: &str) -> GameResult<()> {
        tracing::debug!(path, "loading font");
        let mut font = load_ttf_font(path).await.map_err(|e| GameError::asset(path, e))?;
        font.set_filter(FilterMode::Nearest);
        self.font = Some(font);
        Ok(())
    }
}

impl Surface for MacroquadHost {
    fn screen_size(&self) -> Vec2 {
        vec2(screen_width(), screen_height())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> Vec2 {
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        vec2(dims.width, dims.height)
    }

    fn submit(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear(color) => clear_background(color),
            DrawCommand::Tile { texture, source, dest, size, flip_h, flip_v } => {
                let Some(tex) = self.texture(texture) else { return };
                draw_texture_ex(
                    tex,
                    dest.x.round(),
                    dest.y.round(),
                    WHITE,
                    DrawTextureParams {
                        source: Some(source),
                        dest_size: Some(size),
                        flip_x: flip_h,
                        flip_y: flip_v,
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Sprite { texture, source, center, scale } => {
                let Some(tex) = self.texture(texture) else { return };
                let size = vec2(source.w * scale.x.abs(), source.h * scale.y.abs());
                let top_left = (center - size / 2.0).round();
                draw_texture_ex(
                    tex,
                    top_left.x,
                    top_left.y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(source),
                        dest_size: Some(size),
                        flip_x: scale.x < 0.0,
                        flip_y: scale.y < 0.0,
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Text { text, pos, font_size, scale, anchor, color } => {
                let dims = measure_text(&text, self.font.as_ref(), font_size, scale);
                let x = pos.x - anchor.x * dims.width;
                let top = pos.y - anchor.y * dims.height;
                draw_text_ex(
                    &text,
                    x.round(),
                    (top + dims.offset_y).round(),
                    TextParams {
                        font: self.font.as_ref(),
                        font_size,
                        font_scale: scale,
                        color,
                        ..Default::default()
                    },
                );
            }
        }
    }
}
