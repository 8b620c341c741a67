//! Ephemeral visual feedback: particle bursts and floating text.
//!
//! Both are plain append-and-retain vectors; anything whose life drops to
//! zero is removed in the same tick, so the renderer never sees a dead entry.

mod floating_text;
mod particle;
mod rng;

pub use floating_text::FloatingText;
pub use particle::Particle;
pub use rng::Rng;

use std::f32::consts::TAU;

use glam::Vec2;

use crate::assets::color::Rgba;

/// Burst shape: how many sparks and how fast.
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
}

/// Container for all live effects.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
    next_text_id: u64,
}

impl EffectsState {
    pub fn new() -> Self {
        EffectsState {
            particles: Vec::with_capacity(64),
            texts: Vec::new(),
            next_text_id: 1,
        }
    }

    /// Spawn `spec.count` particles at `center`, each with a uniform random
    /// heading and a speed in `[speed_min, speed_max)`.
    pub fn spawn_burst(&mut self, center: Vec2, spec: BurstSpec, color: Rgba, rng: &mut Rng) {
        for _ in 0..spec.count {
            let angle = rng.next_f32() * TAU;
            let speed = rng.range(spec.speed_min, spec.speed_max);
            self.particles
                .push(Particle::new(center, Vec2::from_angle(angle) * speed, color));
        }
    }

    /// Add a floating text at full life. Returns its id.
    pub fn spawn_text(
        &mut self,
        position: Vec2,
        text: &str,
        sub_text: Option<&str>,
        color: Rgba,
        size: f32,
    ) -> u64 {
        let id = self.next_text_id;
        self.next_text_id += 1;
        self.texts.push(FloatingText {
            id,
            position,
            text: text.to_owned(),
            sub_text: sub_text.map(str::to_owned),
            life: 1.0,
            color,
            size,
        });
        id
    }

    /// Advance every effect one frame and drop the expired ones.
    pub fn tick(&mut self, particle_decay: f32, text_rise: f32, text_decay: f32) {
        self.particles.retain_mut(|p| p.tick(particle_decay));
        self.texts.retain_mut(|t| t.tick(text_rise, text_decay));
    }

    /// Remove all live effects. Text ids keep counting.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.texts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.texts.is_empty()
    }
}

impl Default for EffectsState {
    fn default() -> Self {
        Self::new()
    }
}
