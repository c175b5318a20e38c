//! Trash Hiker: walk a tile map, pick up trash, watch the counter go up.
//!
//! The game core only talks to the outside world through [`command::Surface`] and
//! [`command::AssetSource`]; [`host::MacroquadHost`] implements both on Macroquad.

pub mod animation;
pub mod atlas;
pub mod camera;
pub mod character;
pub mod collection;
pub mod command;
pub mod config;
mod error;
pub mod game;
pub mod host;
pub mod input;
pub mod layer;
pub mod loader {
    pub mod json_loader;
}
pub mod map;
pub mod render;
pub mod spatial;
pub mod tileset;

pub use error::{AnimationError, ConfigError, GameError, GameResult, MapError};
pub use game::Runtime;
pub use map::{decode, DecodedMap, Placement, Tilemap};
