use std::time::Duration;

use macroquad::prelude::{vec2, Vec2};
use pretty_assertions::assert_eq;
use trash_hiker::animation::{AnimationClip, AnimationEvent, Animator};
use trash_hiker::character::{AnimationMode, Character, Facing, HikerClips};
use trash_hiker::config::AnimationRates;
use trash_hiker::input::{InputAggregator, InputEvent};
use trash_hiker::AnimationError;

const BOUNDS: Vec2 = Vec2::new(6400.0, 6400.0);
const SPEED: f32 = 3.0;

fn hiker_at(x: f32, y: f32) -> Character {
    let clips = HikerClips::new(&AnimationRates::default()).expect("valid clips");
    Character::new(vec2(x, y), clips)
}

fn input_holding(keys: &[&str]) -> InputAggregator {
    let mut input = InputAggregator::default();
    input.subscribe();
    for key in keys {
        input.handle(&InputEvent::KeyDown((*key).into()), Duration::ZERO);
    }
    input
}

#[test]
fn holding_d_for_fifty_frames_walks_right() {
    let mut hiker = hiker_at(100.0, 100.0);
    let input = input_holding(&["d"]);

    for _ in 0..50 {
        hiker.update(input.state(), SPEED, BOUNDS, 1.0);
    }

    assert_eq!(hiker.position(), vec2(250.0, 100.0));
    assert_eq!(hiker.mode(), AnimationMode::Walking);
    assert_eq!(hiker.facing(), Facing::Right);
}

#[test]
fn walking_distance_follows_elapsed_time() {
    let input = input_holding(&["d"]);

    // two 120 Hz ticks cover the same ground as one 60 Hz tick
    let mut fast = hiker_at(100.0, 100.0);
    fast.update(input.state(), SPEED, BOUNDS, 0.5);
    fast.update(input.state(), SPEED, BOUNDS, 0.5);

    let mut slow = hiker_at(100.0, 100.0);
    slow.update(input.state(), SPEED, BOUNDS, 1.0);

    assert_eq!(fast.position(), vec2(103.0, 100.0));
    assert_eq!(slow.position(), fast.position());
}

#[test]
fn arrow_keys_move_like_wasd() {
    let mut hiker = hiker_at(100.0, 100.0);
    let input = input_holding(&["arrowup", "arrowleft"]);

    hiker.update(input.state(), SPEED, BOUNDS, 1.0);

    assert_eq!(hiker.position(), vec2(97.0, 97.0));
    assert_eq!(hiker.facing(), Facing::Left);
}

#[test]
fn diagonal_movement_is_additive() {
    let mut hiker = hiker_at(100.0, 100.0);
    let input = input_holding(&["s", "d"]);

    hiker.update(input.state(), SPEED, BOUNDS, 1.0);

    assert_eq!(hiker.position(), vec2(103.0, 103.0));
}

#[test]
fn position_is_clamped_to_the_map() {
    let bounds = vec2(640.0, 640.0);
    let mut hiker = hiker_at(5.0, 635.0);
    let input = input_holding(&["a", "s"]);

    for _ in 0..10 {
        hiker.update(input.state(), SPEED, bounds, 1.0);
        let p = hiker.position();
        assert!(p.x >= 0.0 && p.x <= bounds.x);
        assert!(p.y >= 0.0 && p.y <= bounds.y);
    }

    assert_eq!(hiker.position(), vec2(0.0, 640.0));
}

#[test]
fn releasing_keys_returns_to_idle() {
    let mut hiker = hiker_at(100.0, 100.0);
    let mut input = input_holding(&["w"]);

    hiker.update(input.state(), SPEED, BOUNDS, 1.0);
    assert_eq!(hiker.mode(), AnimationMode::Walking);

    input.handle(&InputEvent::KeyUp("w".into()), Duration::ZERO);
    hiker.update(input.state(), SPEED, BOUNDS, 1.0);

    assert_eq!(hiker.mode(), AnimationMode::Idle);
    assert_eq!(hiker.animator().clip().name(), "idle");
}

#[test]
fn walk_clip_is_not_restarted_every_frame() {
    let mut hiker = hiker_at(100.0, 100.0);
    let input = input_holding(&["d"]);

    // 0.15 frames per tick: after 14 ticks the walk cycle is on frame 2
    for _ in 0..14 {
        hiker.update(input.state(), SPEED, BOUNDS, 1.0);
    }

    assert_eq!(hiker.animator().clip().name(), "walk");
    assert_eq!(hiker.animator().current_frame(), 2);
}

#[test]
fn pickup_blocks_movement_until_the_clip_completes() {
    let mut hiker = hiker_at(100.0, 100.0);
    let input = input_holding(&["d"]);

    assert!(hiker.begin_pickup(3));
    assert_eq!(hiker.mode(), AnimationMode::PickingUp);
    assert!(!hiker.begin_pickup(4), "second pickup must be refused");

    // 8 frames at 0.4 per tick finish within 21 ticks
    let mut finished = None;
    let mut ticks = 0;
    while finished.is_none() && ticks < 40 {
        finished = hiker.update(input.state(), SPEED, BOUNDS, 1.0);
        ticks += 1;
        if finished.is_none() {
            assert_eq!(hiker.position(), vec2(100.0, 100.0));
        }
    }

    assert_eq!(finished, Some(3));
    assert!((20..=21).contains(&ticks), "finished after {ticks} ticks");
    assert_eq!(hiker.mode(), AnimationMode::Idle);
    assert_eq!(hiker.pickup_target(), None);

    // movement resumes on the next tick
    hiker.update(input.state(), SPEED, BOUNDS, 1.0);
    assert_eq!(hiker.position(), vec2(103.0, 100.0));
    assert_eq!(hiker.mode(), AnimationMode::Walking);
}

#[test]
fn pingpong_plays_forward_then_back() {
    let clip = AnimationClip::pingpong("pickup", 9, 13, 10, 1.0).expect("clip");
    assert_eq!(clip.frames(), &[9, 10, 11, 12, 13, 12, 11, 10]);
    assert!(!clip.is_looping());

    let mut animator = Animator::new(clip);
    let mut shown = vec![animator.current_frame()];
    let mut events = Vec::new();
    for _ in 0..10 {
        if let Some(event) = animator.tick(1.0) {
            events.push(event);
        }
        shown.push(animator.current_frame());
    }

    assert_eq!(&shown[..8], &[9, 10, 11, 12, 13, 12, 11, 10]);
    // stays on the last frame and reports completion once
    assert_eq!(&shown[8..], &[10, 10, 10]);
    assert_eq!(events, vec![AnimationEvent::Completed]);
    assert!(!animator.is_playing());
}

#[test]
fn looping_clip_wraps() {
    let clip = AnimationClip::looping("idle", 7..=8, 0.5).expect("clip");
    let mut animator = Animator::new(clip);

    let frames: Vec<_> = (0..4)
        .map(|_| {
            animator.tick(1.0);
            animator.current_frame()
        })
        .collect();

    assert_eq!(frames, vec![7, 8, 8, 7]);
}

#[test]
fn invalid_clips_are_rejected() {
    assert_eq!(
        AnimationClip::new("empty", Vec::new(), 1.0, true).unwrap_err(),
        AnimationError::NoFrames("empty")
    );
    assert!(matches!(
        AnimationClip::new("stopped", vec![1], 0.0, true),
        Err(AnimationError::InvalidRate { .. })
    ));
}
