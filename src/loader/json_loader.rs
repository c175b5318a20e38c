// src/loader/json_loader.rs
use crate::atlas::SpriteAtlas;
use crate::error::{GameError, GameResult, MapError};
use crate::layer::TileLayer;
use crate::map::Tilemap;
use macroquad::prelude::Rect;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "tilelayer" expected here
}

#[derive(Deserialize)]
struct JsonMap {
    width: u32,
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    layers: Vec<JsonLayer>,
}

#[derive(Deserialize)]
struct JsonFrameRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Deserialize)]
struct JsonFrame {
    frame: JsonFrameRect,
}

#[derive(Deserialize)]
struct JsonNamedFrame {
    filename: String,
    frame: JsonFrameRect,
}

/// Aseprite exports either a name-keyed object or an array of frames.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFrames {
    Hash(HashMap<String, JsonFrame>),
    Array(Vec<JsonNamedFrame>),
}

#[derive(Deserialize)]
struct JsonAtlasMeta {
    image: String,
}

#[derive(Deserialize)]
struct JsonAtlas {
    frames: JsonFrames,
    meta: JsonAtlasMeta,
}

impl From<JsonFrameRect> for Rect {
    fn from(r: JsonFrameRect) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

/// Parses a Tiled JSON map. Only tile layers are kept.
pub fn decode_map_str(json: &str) -> Result<Tilemap, MapError> {
    let j: JsonMap = serde_json::from_str(json)?;

    let layers = j
        .layers
        .into_iter()
        .filter(|l| l.kind.as_deref().unwrap_or("tilelayer") == "tilelayer")
        .map(|l| TileLayer::new(l.name, l.width, l.height, l.data))
        .collect();

    let map = Tilemap {
        width: j.width,
        height: j.height,
        tile_width: j.tilewidth,
        tile_height: j.tileheight,
        layers,
    };
    map.validate()?;
    Ok(map)
}

pub fn decode_map_file<P: AsRef<Path>>(path: P) -> Result<Tilemap, MapError> {
    let p = path.as_ref();
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::UnsupportedFormat(p.display().to_string()));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    decode_map_str(&txt)
}

/// Parses a sprite atlas; `meta.image` is resolved relative to `atlas_path`.
pub fn decode_atlas_str(json: &str, atlas_path: &str) -> GameResult<SpriteAtlas> {
    let j: JsonAtlas = serde_json::from_str(json).map_err(|e| GameError::asset(atlas_path, e))?;

    let frames: HashMap<String, Rect> = match j.frames {
        JsonFrames::Hash(map) => map.into_iter().map(|(name, f)| (name, f.frame.into())).collect(),
        JsonFrames::Array(list) => list.into_iter().map(|f| (f.filename, f.frame.into())).collect(),
    };

    Ok(SpriteAtlas {
        image: sibling_path(atlas_path, &j.meta.image),
        frames,
    })
}

fn sibling_path(base: &str, rel: &str) -> String {
    match Path::new(base).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(rel).to_string_lossy().into_owned(),
        _ => rel.to_owned(),
    }
}
