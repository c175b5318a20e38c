use std::collections::HashMap;

use macroquad::prelude::Rect;

use crate::error::{GameError, GameResult};

/// Named frames cut out of one sprite sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteAtlas {
    /// Path of the sheet image, already resolved against the atlas file.
    pub image: String,
    pub frames: HashMap<String, Rect>,
}

impl SpriteAtlas {
    pub fn frame(&self, name: &str) -> Option<Rect> {
        self.frames.get(name).copied()
    }

    pub fn require(&self, name: &str) -> GameResult<Rect> {
        self.frame(name).ok_or_else(|| GameError::MissingFrame {
            atlas: self.image.clone(),
            frame: name.to_owned(),
        })
    }
}

pub const HIKER_FRAME_COUNT: usize = 14;

/// Frame `n` of the hiker sheet is exported as `"hiker {n}.aseprite"`.
pub fn hiker_frame_name(n: usize) -> String {
    format!("hiker {n}.aseprite")
}

/// Source rectangles of the hiker sheet, indexed by frame number.
#[derive(Debug, Clone, PartialEq)]
pub struct HikerFrames {
    frames: Vec<Rect>,
}

impl HikerFrames {
    pub fn from_atlas(atlas: &SpriteAtlas) -> GameResult<Self> {
        let frames = (0..HIKER_FRAME_COUNT)
            .map(|n| atlas.require(&hiker_frame_name(n)))
            .collect::<GameResult<Vec<_>>>()?;
        Ok(Self { frames })
    }

    pub fn get(&self, frame: usize) -> Option<Rect> {
        self.frames.get(frame).copied()
    }
}
