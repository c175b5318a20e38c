//! Normalizes keyboard and touch input into held keys and discrete actions.
//!
//! The host translates its raw events into [`InputEvent`]s and feeds them through
//! [`InputAggregator::handle`]. Everything else only reads [`InputState`].

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use macroquad::prelude::Vec2;

pub const KEY_UP: &str = "w";
pub const KEY_LEFT: &str = "a";
pub const KEY_DOWN: &str = "s";
pub const KEY_RIGHT: &str = "d";
pub const KEY_ARROW_UP: &str = "arrowup";
pub const KEY_ARROW_LEFT: &str = "arrowleft";
pub const KEY_ARROW_DOWN: &str = "arrowdown";
pub const KEY_ARROW_RIGHT: &str = "arrowright";
pub const KEY_PICKUP: &str = " ";

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 20.0;
pub const DEFAULT_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    TouchStart(Vec2),
    TouchMove(Vec2),
    TouchEnd,
    PointerMove(Vec2),
    PointerTap(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pickup,
}

/// Held keys, by lowercased key name.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn up(&self) -> bool {
        self.is_pressed(KEY_UP) || self.is_pressed(KEY_ARROW_UP)
    }

    pub fn down(&self) -> bool {
        self.is_pressed(KEY_DOWN) || self.is_pressed(KEY_ARROW_DOWN)
    }

    pub fn left(&self) -> bool {
        self.is_pressed(KEY_LEFT) || self.is_pressed(KEY_ARROW_LEFT)
    }

    pub fn right(&self) -> bool {
        self.is_pressed(KEY_RIGHT) || self.is_pressed(KEY_ARROW_RIGHT)
    }

    pub fn any_pressed(&self) -> bool {
        self.keys.values().any(|pressed| *pressed)
    }

    fn set(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_lowercase(), pressed);
    }

    fn clear(&mut self) {
        self.keys.values_mut().for_each(|pressed| *pressed = false);
    }
}

#[derive(Debug)]
pub struct InputAggregator {
    state: InputState,
    actions: VecDeque<Action>,
    subscribed: bool,
    touch_ref: Option<Vec2>,
    last_tap: Option<Duration>,
    swipe_threshold: f32,
    double_tap_window: Duration,
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD, DEFAULT_DOUBLE_TAP_WINDOW)
    }
}

impl InputAggregator {
    pub fn new(swipe_threshold: f32, double_tap_window: Duration) -> Self {
        Self {
            state: InputState::default(),
            actions: VecDeque::new(),
            subscribed: false,
            touch_ref: None,
            last_tap: None,
            swipe_threshold,
            double_tap_window,
        }
    }

    /// Starts accepting events.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Stops accepting events and forgets everything held.
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.reset();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn reset(&mut self) {
        self.state.clear();
        self.actions.clear();
        self.touch_ref = None;
        self.last_tap = None;
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn drain_actions(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.actions.drain(..)
    }

    /// Applies one event; `now` is only used for tap timing.
    pub fn handle(&mut self, event: &InputEvent, now: Duration) {
        if !self.subscribed {
            return;
        }

        match event {
            InputEvent::KeyDown(key) => {
                self.state.set(key, true);
                if key == KEY_PICKUP {
                    self.actions.push_back(Action::Pickup);
                }
            }
            InputEvent::KeyUp(key) => self.state.set(key, false),
            InputEvent::TouchStart(pos) => self.touch_ref = Some(*pos),
            InputEvent::TouchMove(pos) => self.touch_moved(*pos),
            InputEvent::TouchEnd => self.touch_ended(now),
            InputEvent::PointerMove(_) | InputEvent::PointerTap(_) => {}
        }
    }

    fn touch_moved(&mut self, pos: Vec2) {
        let Some(reference) = self.touch_ref else {
            self.touch_ref = Some(pos);
            return;
        };
        let delta = pos - reference;
        let threshold = self.swipe_threshold;

        if delta.x.abs() > delta.y.abs() {
            self.state.set(KEY_LEFT, delta.x < -threshold);
            self.state.set(KEY_RIGHT, delta.x > threshold);
        } else {
            self.state.set(KEY_UP, delta.y < -threshold);
            self.state.set(KEY_DOWN, delta.y > threshold);
        }

        self.touch_ref = Some(pos);
    }

    fn touch_ended(&mut self, now: Duration) {
        for key in [KEY_UP, KEY_LEFT, KEY_DOWN, KEY_RIGHT] {
            self.state.set(key, false);
        }
        self.touch_ref = None;

        if let Some(last) = self.last_tap {
            if now.saturating_sub(last) < self.double_tap_window {
                tracing::trace!("double tap");
                self.actions.push_back(Action::Pickup);
            }
        }
        self.last_tap = Some(now);
    }
}
