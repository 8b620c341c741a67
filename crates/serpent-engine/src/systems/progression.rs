//! Food, eating and the combo counter.

use glam::Vec2;

use crate::assets::theme::VocabularyItem;
use crate::systems::effects::Rng;

/// The single live food item.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Vec2,
    pub vocab: VocabularyItem,
    /// Appearance scale, eases 0 -> 1 after spawning. Cosmetic only.
    pub growth_scale: f32,
}

impl Food {
    /// Grow the appearance scale by `rate`, capped at 1.
    pub fn grow(&mut self, rate: f32) {
        self.growth_scale = (self.growth_scale + rate).min(1.0);
    }

    /// True when `head` is strictly closer than `radius`.
    pub fn is_eaten_by(&self, head: Vec2, radius: f32) -> bool {
        head.distance(self.position) < radius
    }
}

/// Pick a random vocabulary item and a random spot inside the canvas, keeping
/// `padding` px clear of every edge.
///
/// Returns `None` when the vocabulary is empty. A canvas too small for the
/// padding collapses the range onto the padded origin, clamped into the canvas.
pub fn spawn_food(
    vocabulary: &[VocabularyItem],
    bounds: Vec2,
    padding: f32,
    rng: &mut Rng,
) -> Option<Food> {
    let index = rng.pick_index(vocabulary.len())?;
    let x = padded_coord(bounds.x, padding, rng);
    let y = padded_coord(bounds.y, padding, rng);
    Some(Food {
        position: Vec2::new(x, y),
        vocab: vocabulary[index].clone(),
        growth_scale: 0.0,
    })
}

fn padded_coord(extent: f32, padding: f32, rng: &mut Rng) -> f32 {
    let span = extent - 2.0 * padding;
    if span > 0.0 {
        padding + rng.next_f32() * span
    } else {
        padding.min(extent).max(0.0)
    }
}

/// Consecutive-eat counter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Combo {
    pub count: u32,
    /// Timestamp of the previous eat; `None` before the first one.
    pub last_eat_ms: Option<f64>,
}

impl Combo {
    /// Register an eat at `now_ms`. Gaps shorter than `timeout_ms` extend the
    /// combo, anything else restarts it at 1. Returns the new count.
    pub fn register(&mut self, now_ms: f64, timeout_ms: f64) -> u32 {
        self.count = match self.last_eat_ms {
            Some(last) if now_ms - last < timeout_ms => self.count + 1,
            _ => 1,
        };
        self.last_eat_ms = Some(now_ms);
        self.count
    }

    pub fn reset(&mut self) {
        *self = Combo::default();
    }
}
