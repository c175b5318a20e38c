//! Error types for the game runtime.
//!
//! Map problems are kept apart from asset problems so a caller can tell a broken
//! level file from a missing one.

use std::path::PathBuf;

/// Main error type returned by the runtime and the loaders.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("failed to load asset '{path}': {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("atlas '{atlas}' has no frame named '{frame}'")]
    MissingFrame { atlas: String, frame: String },

    #[error("map error: {0}")]
    Map(#[from] MapError),

    #[error("animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl GameError {
    pub fn asset(path: impl Into<String>, reason: impl ToString) -> Self {
        GameError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// A tilemap that cannot be decoded into placements.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("failed to parse map JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported map format: {0}")]
    UnsupportedFormat(String),

    #[error("layer '{layer}' is {width}x{height} tiles but the map is {map_width}x{map_height}")]
    LayerDimensions {
        layer: String,
        width: u32,
        height: u32,
        map_width: u32,
        map_height: u32,
    },

    #[error("layer '{layer}' has {actual} tiles, expected {expected}")]
    InvalidLayerSize {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("layer '{layer}' cell {index} references tile {tile_id}, tileset has {tile_count}")]
    InvalidTileId {
        layer: String,
        index: usize,
        tile_id: u32,
        tile_count: u32,
    },

    #[error("invalid tileset: {0}")]
    InvalidTileset(String),

    #[error("map tiles are {tile_width}x{tile_height}px but the tileset is cut into {tileset}px squares")]
    TileSizeMismatch {
        tile_width: u32,
        tile_height: u32,
        tileset: u32,
    },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AnimationError {
    #[error("animation '{0}' has no frames")]
    NoFrames(&'static str),

    #[error("animation '{name}' has invalid rate {rate}")]
    InvalidRate { name: &'static str, rate: f32 },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for runtime operations.
pub type GameResult<T> = Result<T, GameError>;
