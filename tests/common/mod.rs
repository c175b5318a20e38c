#![allow(dead_code)]

use std::collections::HashMap;

use macroquad::prelude::{vec2, Vec2};
use trash_hiker::command::{AssetSource, DrawCommand, Surface, TextureHandle, TextureInfo};
use trash_hiker::config::GameConfig;
use trash_hiker::{GameError, GameResult};

pub const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

/// In-memory assets plus a recording surface.
pub struct FakeHost {
    pub texts: HashMap<String, String>,
    pub textures: HashMap<String, (u32, u32)>,
    pub fonts: Vec<String>,
    pub font_loads: usize,
    pub loaded: Vec<String>,
    pub commands: Vec<DrawCommand>,
    pub screen: Vec2,
    next_handle: u32,
}

impl FakeHost {
    pub fn empty() -> Self {
        Self {
            texts: HashMap::new(),
            textures: HashMap::new(),
            fonts: Vec::new(),
            font_loads: 0,
            loaded: Vec::new(),
            commands: Vec::new(),
            screen: SCREEN,
            next_handle: 0,
        }
    }

    /// Every asset the default config asks for.
    pub fn with_game_assets() -> Self {
        let paths = GameConfig::default().assets;
        let mut host = Self::empty();
        host.fonts.push(paths.font.clone());
        host.texts.insert(paths.title_atlas.clone(), title_atlas_json());
        host.textures.insert("assets/sprites/trash-hiker-2.png".into(), (200, 120));
        host.texts.insert(paths.tilemap.clone(), level_json());
        host.textures.insert(paths.tileset.clone(), (320, 320));
        host.texts.insert(paths.hiker_atlas.clone(), hiker_atlas_json());
        host.textures.insert("assets/sprites/hiker.png".into(), (14 * 16, 16));
        host
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl AssetSource for FakeHost {
    async fn load_text(&mut self, path: &str) -> GameResult<String> {
        self.loaded.push(path.to_owned());
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| GameError::asset(path, "not found"))
    }

    async fn load_texture(&mut self, path: &str) -> GameResult<TextureInfo> {
        self.loaded.push(path.to_owned());
        let (width, height) = *self
            .textures
            .get(path)
            .ok_or_else(|| GameError::asset(path, "not found"))?;
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        Ok(TextureInfo { handle, width, height })
    }

    async fn load_font(&mut self, path: &str) -> GameResult<()> {
        self.loaded.push(path.to_owned());
        self.font_loads += 1;
        if self.fonts.iter().any(|f| f == path) {
            Ok(())
        } else {
            Err(GameError::asset(path, "not found"))
        }
    }
}

impl Surface for FakeHost {
    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn measure_text(&self, text: &str, font_size: u16) -> Vec2 {
        vec2(text.len() as f32 * font_size as f32 * 0.6, font_size as f32)
    }

    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

pub fn title_atlas_json() -> String {
    r#"{
      "frames": {
        "trash-hiker-2.aseprite": { "frame": { "x": 0, "y": 0, "w": 200, "h": 120 } }
      },
      "meta": { "image": "trash-hiker-2.png" }
    }"#
    .into()
}

pub fn hiker_atlas_json() -> String {
    let frames: Vec<String> = (0..14)
        .map(|n| {
            format!(
                r#""hiker {n}.aseprite": {{ "frame": {{ "x": {}, "y": 0, "w": 16, "h": 16 }} }}"#,
                n * 16
            )
        })
        .collect();
    format!(
        r#"{{ "frames": {{ {} }}, "meta": {{ "image": "hiker.png" }} }}"#,
        frames.join(", ")
    )
}

/// 10x10 level: a ground layer of tile 1 and two pieces of trash, at
/// cell (1,1) (world center (96,96)) and cell (8,8), the second one flipped.
pub fn level_json() -> String {
    level_json_with_trash(&[(11, 11), (88, 12 | 0x8000_0000)])
}

pub fn level_json_with_trash(trash: &[(usize, u32)]) -> String {
    let ground = vec![1u32; 100];
    let mut trash_layer = vec![0u32; 100];
    for (idx, code) in trash {
        trash_layer[*idx] = *code;
    }
    serde_json::json!({
        "width": 10,
        "height": 10,
        "tilewidth": 32,
        "tileheight": 32,
        "layers": [
            { "type": "tilelayer", "name": "ground", "width": 10, "height": 10, "data": ground },
            { "type": "tilelayer", "name": "trash", "width": 10, "height": 10, "data": trash_layer }
        ]
    })
    .to_string()
}
