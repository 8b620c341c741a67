use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable constants for the simulation.
///
/// All distances are in canvas pixels and all rates are per frame: motion is
/// deliberately frame-coupled, so a faster display makes the snake faster.
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width until the host reports a real size.
    pub canvas_width: f32,
    /// Canvas height until the host reports a real size.
    pub canvas_height: f32,
    /// Number of body points at (re)start.
    pub initial_length: usize,
    /// Maximum gap between consecutive body points.
    pub segment_distance: f32,
    /// Fraction of the head→target gap closed per frame while seeking.
    pub speed_multiplier: f32,
    /// Head step length per frame while wandering.
    pub wander_speed: f32,
    /// Max heading perturbation per frame while wandering (radians, ±).
    pub wander_jitter: f32,
    /// Food glyph size; also the food collision radius.
    pub food_size: f32,
    /// Extra slack added to the food radius for the eat test.
    pub eat_margin: f32,
    /// Keep-out border when placing food.
    pub food_padding: f32,
    /// Per-frame growth of a fresh food's appearance scale.
    pub food_grow_rate: f32,
    /// Eats closer together than this extend the combo.
    pub combo_timeout_ms: f64,
    /// Tail duplicates appended per eat.
    pub growth_per_eat: usize,
    pub particle_count: usize,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    /// Life lost per frame by a particle.
    pub particle_decay: f32,
    /// Upward drift per frame of floating text.
    pub text_rise: f32,
    /// Life lost per frame by floating text.
    pub text_decay: f32,
    /// Font size of the floating romanization line.
    pub text_size: f32,
    /// Pitch factor passed with the eat chime.
    pub chime_pitch: f32,
    /// RNG seed. Same seed, same inputs, same session.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            initial_length: 25,
            segment_distance: 12.0,
            speed_multiplier: 0.18,
            wander_speed: 3.0,
            wander_jitter: 0.1,
            food_size: 40.0,
            eat_margin: 5.0,
            food_padding: 80.0,
            food_grow_rate: 0.05,
            combo_timeout_ms: 2500.0,
            growth_per_eat: 2,
            particle_count: 12,
            particle_speed_min: 2.0,
            particle_speed_max: 8.0,
            particle_decay: 0.03,
            text_rise: 1.5,
            text_decay: 0.015,
            text_size: 32.0,
            chime_pitch: 1.0,
            seed: 42,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config value `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("particle speed range is inverted ({min} > {max})")]
    InvertedSpeedRange { min: f32, max: f32 },
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f64); 10] = [
            ("canvas_width", self.canvas_width as f64),
            ("canvas_height", self.canvas_height as f64),
            ("initial_length", self.initial_length as f64),
            ("segment_distance", self.segment_distance as f64),
            ("speed_multiplier", self.speed_multiplier as f64),
            ("wander_speed", self.wander_speed as f64),
            ("food_size", self.food_size as f64),
            ("food_grow_rate", self.food_grow_rate as f64),
            ("particle_decay", self.particle_decay as f64),
            ("text_decay", self.text_decay as f64),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.particle_speed_min > self.particle_speed_max {
            return Err(ConfigError::InvertedSpeedRange {
                min: self.particle_speed_min,
                max: self.particle_speed_max,
            });
        }
        Ok(())
    }

    /// Head-to-food distance below which food is eaten.
    pub fn eat_radius(&self) -> f32 {
        self.food_size + self.eat_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert_eq!(GameConfig::default().eat_radius(), 45.0);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "wander_speed": 5.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.wander_speed, 5.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.segment_distance, 12.0);
        assert_eq!(config.initial_length, 25);
    }

    #[test]
    fn zero_segment_distance_rejected() {
        let err = GameConfig::from_json(r#"{ "segment_distance": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive { field: "segment_distance", .. }
        ));
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let config = GameConfig {
            particle_speed_min: 9.0,
            particle_speed_max: 2.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedSpeedRange { .. })
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
