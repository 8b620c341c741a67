//! Burst particles.

use glam::Vec2;

use crate::assets::color::Rgba;

/// A single spark from an eat burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// 1.0 at spawn, removed once it reaches 0.
    pub life: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Rgba) -> Self {
        Particle {
            position,
            velocity,
            life: 1.0,
            color,
        }
    }

    /// Advance one frame. Returns false when expired.
    pub fn tick(&mut self, decay: f32) -> bool {
        self.position += self.velocity;
        self.life -= decay;
        self.life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_moves_by_velocity() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(2.0, -1.0), Rgba::WHITE);
        assert!(p.tick(0.03));
        assert_eq!(p.position, Vec2::new(2.0, -1.0));
        assert!((p.life - 0.97).abs() < 1e-6);
    }

    #[test]
    fn particle_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, Rgba::WHITE);
        let mut frames = 0;
        while p.tick(0.03) {
            frames += 1;
            assert!(frames < 100, "particle should expire");
        }
        // 1.0 / 0.03 rounds up to 34 frames of decay.
        assert_eq!(frames, 33);
        assert!(p.life <= 0.0);
    }
}
