//! Tunables for the game, loadable from a JSON file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use macroquad::prelude::{vec2, Color, Conf, Vec2};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a config file to load instead of the default.
pub const CONFIG_ENV: &str = "TRASH_HIKER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "trash_hiker.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub tile_size: u32,
    pub render_scale: f32,
    pub hiker_scale: f32,
    pub title_scale: f32,
    pub move_speed: f32,
    pub pickup_range: f32,
    pub start_position: [f32; 2],
    pub collectible_layer: String,
    pub animation: AnimationRates,
    pub input: InputConfig,
    pub colors: Colors,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tile_size: 32,
            render_scale: 2.0,
            hiker_scale: 3.0,
            title_scale: 2.0,
            move_speed: 3.0,
            pickup_range: 50.0,
            start_position: [100.0, 100.0],
            collectible_layer: "trash".into(),
            animation: AnimationRates::default(),
            input: InputConfig::default(),
            colors: Colors::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&txt, path)
    }

    /// `$TRASH_HIKER_CONFIG`, then `trash_hiker.json`, then the defaults.
    ///
    /// A file that is named explicitly must exist; the fallback file is optional.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from_file(PathBuf::from(path));
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::load_from_file(fallback);
        }
        Ok(Self::default())
    }

    pub fn start_position(&self) -> Vec2 {
        vec2(self.start_position[0], self.start_position[1])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Trash Hiker".into(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn to_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.width,
            window_height: self.height,
            window_resizable: self.resizable,
            ..Default::default()
        }
    }
}

/// Animation rates in frames per 60 Hz tick.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationRates {
    pub idle: f32,
    pub walk: f32,
    pub pickup: f32,
}

impl Default for AnimationRates {
    fn default() -> Self {
        Self {
            idle: 0.017,
            walk: 0.15,
            pickup: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub swipe_threshold: f32,
    pub double_tap_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: crate::input::DEFAULT_SWIPE_THRESHOLD,
            double_tap_ms: 300,
        }
    }
}

impl InputConfig {
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_ms)
    }
}

/// Colors as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub title_background: u32,
    pub level_background: u32,
    pub text: u32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            title_background: 0x222222,
            level_background: 0x2d5016,
            text: 0xffffff,
        }
    }
}

pub fn rgb(hex: u32) -> Color {
    Color::from_hex(hex)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub font: String,
    pub title_atlas: String,
    pub title_frame: String,
    pub tilemap: String,
    pub tileset: String,
    pub hiker_atlas: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            font: "assets/fonts/DepartureMono-Regular.ttf".into(),
            title_atlas: "assets/sprites/trash-hiker-2.json".into(),
            title_frame: "trash-hiker-2.aseprite".into(),
            tilemap: "assets/tilemaps/level1.json".into(),
            tileset: "assets/sprites/water_bottle.png".into(),
            hiker_atlas: "assets/sprites/hiker.json".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = GameConfig::from_json_str(
            r#"{ "move_speed": 5.0, "animation": { "walk": 0.2 } }"#,
            Path::new("inline.json"),
        )
        .expect("valid config");

        assert_eq!(cfg.move_speed, 5.0);
        assert_eq!(cfg.animation.walk, 0.2);
        assert_eq!(cfg.animation.idle, 0.017);
        assert_eq!(cfg.pickup_range, 50.0);
        assert_eq!(cfg.collectible_layer, "trash");
    }

    #[test]
    fn malformed_config_reports_path() {
        let err = GameConfig::from_json_str("{ nope", Path::new("broken.json")).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn window_section_reaches_the_window_conf() {
        let cfg = GameConfig::from_json_str(
            r#"{ "window": { "width": 1280, "resizable": false } }"#,
            Path::new("inline.json"),
        )
        .expect("valid config");

        let conf = cfg.window.to_conf();
        assert_eq!(conf.window_width, 1280);
        assert_eq!(conf.window_height, 600);
        assert_eq!(conf.window_title, "Trash Hiker");
        assert!(!conf.window_resizable);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = GameConfig::load_from_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
