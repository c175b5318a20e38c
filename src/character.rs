//! The hiker: position, facing and the Idle / Walking / PickingUp state machine.

use macroquad::prelude::*;

use crate::animation::{AnimationClip, AnimationEvent, Animator};
use crate::config::AnimationRates;
use crate::error::AnimationError;
use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Idle,
    Walking,
    PickingUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sign of the horizontal draw scale. The hiker art faces left.
    pub fn scale_sign(self) -> f32 {
        match self {
            Facing::Left => 1.0,
            Facing::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HikerClips {
    pub walk: AnimationClip,
    pub idle: AnimationClip,
    pub pickup: AnimationClip,
}

impl HikerClips {
    pub fn new(rates: &AnimationRates) -> Result<Self, AnimationError> {
        Ok(Self {
            walk: AnimationClip::looping("walk", 0..=6, rates.walk)?,
            idle: AnimationClip::looping("idle", 7..=8, rates.idle)?,
            pickup: AnimationClip::pingpong("pickup", 9, 13, 10, rates.pickup)?,
        })
    }
}

#[derive(Debug)]
pub struct Character {
    position: Vec2,
    mode: AnimationMode,
    facing: Facing,
    animator: Animator,
    clips: HikerClips,
    pickup_target: Option<usize>,
}

impl Character {
    pub fn new(position: Vec2, clips: HikerClips) -> Self {
        Self {
            position,
            mode: AnimationMode::Idle,
            facing: Facing::Left,
            animator: Animator::new(clips.idle.clone()),
            clips,
            pickup_target: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn pickup_target(&self) -> Option<usize> {
        self.pickup_target
    }

    pub fn can_pick_up(&self) -> bool {
        self.mode != AnimationMode::PickingUp
    }

    /// Starts the pickup clip aimed at `item`. Ignored while a pickup is running.
    pub fn begin_pickup(&mut self, item: usize) -> bool {
        if !self.can_pick_up() {
            return false;
        }
        tracing::debug!(item, "pickup started");
        self.mode = AnimationMode::PickingUp;
        self.pickup_target = Some(item);
        self.animator.play(&self.clips.pickup);
        true
    }

    /// Applies held movement keys, then clamps to `[0, bounds]`.
    ///
    /// Does nothing while picking up.
    pub fn apply_movement(&mut self, input: &InputState, speed: f32, bounds: Vec2) {
        if self.mode == AnimationMode::PickingUp {
            return;
        }

        let mut moving = false;
        if input.up() {
            self.position.y -= speed;
            moving = true;
        }
        if input.down() {
            self.position.y += speed;
            moving = true;
        }
        if input.left() {
            self.position.x -= speed;
            self.facing = Facing::Left;
            moving = true;
        }
        if input.right() {
            self.position.x += speed;
            self.facing = Facing::Right;
            moving = true;
        }

        self.position = self.position.clamp(Vec2::ZERO, bounds.max(Vec2::ZERO));

        let mode = if moving { AnimationMode::Walking } else { AnimationMode::Idle };
        if mode != self.mode {
            self.mode = mode;
            let clip = if moving { &self.clips.walk } else { &self.clips.idle };
            self.animator.play(clip);
        }
    }

    /// Advances the current clip. Returns the targeted item once a pickup finishes,
    /// at which point the hiker is back to Idle.
    pub fn tick_animation(&mut self, dt: f32) -> Option<usize> {
        let event = self.animator.tick(dt);
        match (self.mode, event) {
            (AnimationMode::PickingUp, Some(AnimationEvent::Completed)) => {
                self.mode = AnimationMode::Idle;
                self.animator.play(&self.clips.idle);
                let target = self.pickup_target.take();
                tracing::debug!(item = ?target, "pickup finished");
                target
            }
            _ => None,
        }
    }

    /// One tick: movement (unless picking up), then animation.
    ///
    /// `speed` is pixels per 60 Hz frame and `dt` is in the same frames, so walking
    /// and animation keep pace at any refresh rate.
    pub fn update(&mut self, input: &InputState, speed: f32, bounds: Vec2, dt: f32) -> Option<usize> {
        self.apply_movement(input, speed * dt, bounds);
        self.tick_animation(dt)
    }
}
