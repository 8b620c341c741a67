//! Head steering and body follow.
//!
//! Each frame the head either seeks the tracked fingertip or wanders on its
//! own, then the body chain is relaxed behind it. The mode is picked fresh
//! every frame from the tracker's flag, so a flickering detection flickers the
//! movement too.

use std::f32::consts::PI;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::core::snake::Snake;
use crate::systems::effects::Rng;

/// Movement mode for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionMode {
    /// Hand detected: ease toward the target.
    Seeking { target: Vec2 },
    /// No hand: random walk that bounces off the canvas edges.
    Wandering,
}

/// Persistent wander heading. The only locomotion state that outlives a frame.
#[derive(Debug, Clone, Default)]
pub struct Locomotion {
    wander_angle: f32,
}

impl Locomotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }

    /// Move the head for one frame, then relax the chain.
    ///
    /// `bounds` is the canvas size; wandering keeps the head inside
    /// `[0, bounds.x] x [0, bounds.y]`. Seeking is not clamped.
    pub fn step(
        &mut self,
        snake: &mut Snake,
        mode: MotionMode,
        bounds: Vec2,
        config: &GameConfig,
        rng: &mut Rng,
    ) {
        let head = snake.head();
        let next = match mode {
            MotionMode::Seeking { target } => head + (target - head) * config.speed_multiplier,
            MotionMode::Wandering => self.wander(head, bounds, config, rng),
        };
        snake.set_head(next);
        snake.relax(config.segment_distance);
    }

    fn wander(&mut self, head: Vec2, bounds: Vec2, config: &GameConfig, rng: &mut Rng) -> Vec2 {
        self.wander_angle += rng.range(-config.wander_jitter, config.wander_jitter);
        let mut next = head + Vec2::from_angle(self.wander_angle) * config.wander_speed;

        // Mirror the heading off whichever wall was crossed.
        if next.x < 0.0 || next.x > bounds.x {
            self.wander_angle = PI - self.wander_angle;
            next.x = next.x.clamp(0.0, bounds.x);
        }
        if next.y < 0.0 || next.y > bounds.y {
            self.wander_angle = -self.wander_angle;
            next.y = next.y.clamp(0.0, bounds.y);
        }
        next
    }
}
