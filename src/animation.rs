use crate::error::AnimationError;

/// A named frame sequence played at a fixed rate.
///
/// `rate` is in frames per tick, where one tick is a 60 Hz frame; a rate of 0.15
/// advances the clip roughly every seven ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: &'static str,
    frames: Vec<usize>,
    rate: f32,
    looping: bool,
}

impl AnimationClip {
    pub fn new(name: &'static str, frames: Vec<usize>, rate: f32, looping: bool) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::NoFrames(name));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(AnimationError::InvalidRate { name, rate });
        }
        Ok(Self {
            name,
            frames,
            rate,
            looping,
        })
    }

    /// Looping clip over an inclusive frame range.
    pub fn looping(name: &'static str, frames: std::ops::RangeInclusive<usize>, rate: f32) -> Result<Self, AnimationError> {
        Self::new(name, frames.collect(), rate, true)
    }

    /// One-shot clip that plays `first..=last` and then walks back down to `back_to`.
    ///
    /// `pingpong(9, 13, 10)` yields 9 10 11 12 13 12 11 10.
    pub fn pingpong(name: &'static str, first: usize, last: usize, back_to: usize, rate: f32) -> Result<Self, AnimationError> {
        let mut frames: Vec<usize> = (first..=last).collect();
        frames.extend((back_to..last).rev());
        Self::new(name, frames, rate, false)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A one-shot clip reached its end.
    Completed,
}

/// Plays one clip at a time.
#[derive(Debug, Clone)]
pub struct Animator {
    clip: AnimationClip,
    time: f32,
    playing: bool,
}

impl Animator {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            time: 0.0,
            playing: true,
        }
    }

    /// Switches to `clip` and restarts from its first frame.
    pub fn play(&mut self, clip: &AnimationClip) {
        self.clip = clip.clone();
        self.time = 0.0;
        self.playing = true;
    }

    pub fn tick(&mut self, dt: f32) -> Option<AnimationEvent> {
        if !self.playing {
            return None;
        }

        let len = self.clip.frames.len() as f32;
        self.time += self.clip.rate * dt;

        if self.clip.looping {
            self.time = self.time.rem_euclid(len);
            None
        } else if self.time >= len {
            self.time = len - 1.0;
            self.playing = false;
            Some(AnimationEvent::Completed)
        } else {
            None
        }
    }

    /// Index into the clip's frame list.
    pub fn current_index(&self) -> usize {
        (self.time.floor() as usize).min(self.clip.frames.len() - 1)
    }

    /// Atlas frame number currently shown.
    pub fn current_frame(&self) -> usize {
        self.clip.frames[self.current_index()]
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
