use glam::Vec2;

use crate::assets::color::Rgba;

/// Text that rises from an eaten food and fades out.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    /// Unique per session, strictly increasing.
    pub id: u64,
    pub position: Vec2,
    pub text: String,
    /// Optional second line drawn under the main text.
    pub sub_text: Option<String>,
    pub life: f32,
    pub color: Rgba,
    pub size: f32,
}

impl FloatingText {
    /// Advance one frame: rise by `rise` px and lose `decay` life.
    /// Returns false when expired.
    pub fn tick(&mut self, rise: f32, decay: f32) -> bool {
        self.position.y -= rise;
        self.life -= decay;
        self.life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FloatingText {
        FloatingText {
            id: 1,
            position: Vec2::new(100.0, 100.0),
            text: "pou4 gwo2".into(),
            sub_text: Some("Apple".into()),
            life: 1.0,
            color: Rgba::WHITE,
            size: 32.0,
        }
    }

    #[test]
    fn text_rises_and_fades() {
        let mut t = sample();
        assert!(t.tick(1.5, 0.015));
        assert_eq!(t.position, Vec2::new(100.0, 98.5));
        assert!((t.life - 0.985).abs() < 1e-6);
    }

    #[test]
    fn text_expires_after_enough_frames() {
        let mut t = sample();
        let mut frames = 0;
        while t.tick(1.5, 0.015) {
            frames += 1;
        }
        assert!((66..=67).contains(&frames), "expired after {} frames", frames);
    }
}
