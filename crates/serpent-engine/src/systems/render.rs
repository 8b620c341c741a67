//! Builds the per-frame draw list from game state.
//!
//! Pure: reads a `SnakeGame` and a timestamp, writes nothing back. Layer
//! order is background, particles, food, snake, floating text, then the
//! debug target.

use glam::Vec2;

use crate::api::game::SnakeGame;
use crate::assets::color::Rgba;
use crate::renderer::draw::{
    Baseline, DrawCommand, DrawList, Font, FontFamily, FontStyle, Glow, Outline,
};

/// Background wash opacity (0xE6 of 0xFF).
const BACKGROUND_ALPHA: u8 = 0xE6;
const PARTICLE_RADIUS: f32 = 4.0;
const PARTICLE_GLOW: f32 = 10.0;
const FOOD_GLOW: f32 = 25.0;
const FOOD_SYMBOL_OFFSET: Vec2 = Vec2::new(0.0, -10.0);
const FOOD_LABEL_OFFSET: Vec2 = Vec2::new(0.0, 25.0);
const FOOD_LABEL_FONT: Font = Font::new(20.0, FontStyle::Bold, FontFamily::SansSerif);
const SPINE_GLOW: f32 = 20.0;
const SEGMENT_BASE_RADIUS: f32 = 14.0;
const SEGMENT_MIN_RADIUS: f32 = 4.0;
const HEAD_GLOW: f32 = 15.0;
const TEXT_OUTLINE_WIDTH: f32 = 4.0;
const SUB_TEXT_OFFSET: f32 = 25.0;
const SUB_TEXT_FONT: Font = Font::new(18.0, FontStyle::Italic, FontFamily::SansSerif);
const SUB_TEXT_OUTLINE_WIDTH: f32 = 2.0;
const TARGET_RING_RADIUS: f32 = 20.0;
const TARGET_RING_DASH: [f32; 2] = [5.0, 5.0];
const TARGET_DOT_RADIUS: f32 = 4.0;

/// Food pulse: a slow ±10% breathing scaled by the spawn-in growth.
pub fn food_pulse(now_ms: f64, growth_scale: f32) -> f32 {
    (1.0 + (now_ms / 200.0).sin() as f32 * 0.1) * growth_scale
}

/// Segment radius tapering from head to tail, never below the minimum.
pub fn segment_radius(index: usize, len: usize) -> f32 {
    let taper = 1.0 - index as f32 / (len + 5) as f32;
    (SEGMENT_BASE_RADIUS * taper).max(SEGMENT_MIN_RADIUS)
}

pub fn build_draw_list(game: &SnakeGame, now_ms: f64) -> DrawList {
    let canvas = game.canvas();
    let theme = game.theme();
    let mut list = DrawList::new(canvas.x, canvas.y);

    list.push(DrawCommand::Clear {
        color: theme.background_color.with_alpha(BACKGROUND_ALPHA),
    });

    // Particles
    for p in &game.effects().particles {
        list.push(DrawCommand::SetAlpha { alpha: p.life });
        list.push(DrawCommand::Circle {
            center: p.position,
            radius: PARTICLE_RADIUS,
            color: p.color,
            glow: Some(Glow {
                blur: PARTICLE_GLOW,
                color: p.color,
            }),
        });
    }
    list.push(DrawCommand::SetAlpha { alpha: 1.0 });

    // Food
    if let Some(food) = game.food() {
        list.push(DrawCommand::PushTransform {
            translate: food.position,
            scale: food_pulse(now_ms, food.growth_scale),
        });
        list.push(DrawCommand::Text {
            position: FOOD_SYMBOL_OFFSET,
            text: food.vocab.symbol.clone(),
            font: Font::new(game.config().food_size, FontStyle::Normal, FontFamily::Serif),
            color: Rgba::WHITE,
            baseline: Baseline::Middle,
            outline: None,
            glow: Some(Glow {
                blur: FOOD_GLOW,
                color: theme.particle_color,
            }),
        });
        list.push(DrawCommand::Text {
            position: FOOD_LABEL_OFFSET,
            text: food.vocab.target_text.clone(),
            font: FOOD_LABEL_FONT,
            color: Rgba::WHITE,
            baseline: Baseline::Middle,
            outline: None,
            glow: None,
        });
        list.push(DrawCommand::PopTransform);
    }

    // Snake: glowing spine, then discs from tail to head so the head is on top.
    let points = game.snake().points();
    list.push(DrawCommand::Polyline {
        points: points.to_vec(),
        color: theme.body_color,
        width: 1.0,
        glow: Some(Glow {
            blur: SPINE_GLOW,
            color: theme.body_color,
        }),
    });
    for (i, &center) in points.iter().enumerate().rev() {
        let (color, glow) = if i == 0 {
            (
                theme.head_color,
                Some(Glow {
                    blur: HEAD_GLOW,
                    color: theme.head_color,
                }),
            )
        } else {
            (theme.body_color, None)
        };
        list.push(DrawCommand::Circle {
            center,
            radius: segment_radius(i, points.len()),
            color,
            glow,
        });
    }

    // Floating text
    for t in &game.effects().texts {
        list.push(DrawCommand::SetAlpha { alpha: t.life });
        list.push(DrawCommand::Text {
            position: t.position,
            text: t.text.clone(),
            font: Font::new(t.size, FontStyle::Bold, FontFamily::Monospace),
            color: t.color,
            baseline: Baseline::Alphabetic,
            outline: Some(Outline {
                color: Rgba::BLACK,
                width: TEXT_OUTLINE_WIDTH,
            }),
            glow: None,
        });
        if let Some(sub) = &t.sub_text {
            list.push(DrawCommand::Text {
                position: t.position + Vec2::new(0.0, SUB_TEXT_OFFSET),
                text: sub.clone(),
                font: SUB_TEXT_FONT,
                color: Rgba::SLATE_200,
                baseline: Baseline::Alphabetic,
                outline: Some(Outline {
                    color: Rgba::BLACK,
                    width: SUB_TEXT_OUTLINE_WIDTH,
                }),
                glow: None,
            });
        }
    }
    list.push(DrawCommand::SetAlpha { alpha: 1.0 });

    // Debug target
    let tracker = game.tracker();
    if tracker.hand_detected() {
        let target = tracker.target();
        list.push(DrawCommand::Ring {
            center: target,
            radius: TARGET_RING_RADIUS,
            // rgba(255, 255, 255, 0.3)
            color: Rgba::WHITE.with_alpha(77),
            width: 2.0,
            dash: Some(TARGET_RING_DASH),
        });
        list.push(DrawCommand::Circle {
            center: target,
            radius: TARGET_DOT_RADIUS,
            color: Rgba::WHITE,
            glow: None,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use crate::api::types::FrameInput;
    use crate::assets::default_theme::default_theme;

    fn game() -> SnakeGame {
        SnakeGame::new(GameConfig::default(), default_theme())
    }

    fn circles(list: &DrawList) -> Vec<(Vec2, f32, Rgba)> {
        list.iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, color, .. } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn background_comes_first_with_theme_color() {
        let g = game();
        let list = build_draw_list(&g, 0.0);
        assert_eq!(
            list.commands[0],
            DrawCommand::Clear {
                color: g.theme().background_color.with_alpha(0xE6)
            }
        );
        assert_eq!((list.width, list.height), (800.0, 600.0));
    }

    #[test]
    fn segments_drawn_tail_to_head_with_taper() {
        let g = game();
        let list = build_draw_list(&g, 0.0);
        let discs = circles(&list);
        assert_eq!(discs.len(), 25);
        let head = discs.last().unwrap();
        assert_eq!(head.1, 14.0);
        assert_eq!(head.2, g.theme().head_color);
        assert_eq!(discs[0].2, g.theme().body_color);
        assert!(discs.iter().all(|d| d.1 >= 4.0));
    }

    #[test]
    fn taper_formula() {
        assert_eq!(segment_radius(0, 25), 14.0);
        assert!((segment_radius(15, 25) - 7.0).abs() < 1e-5);
        assert_eq!(segment_radius(29, 30), 4.0);
    }

    #[test]
    fn fresh_food_is_drawn_at_zero_scale() {
        let g = game();
        let list = build_draw_list(&g, 0.0);
        let food = g.food().unwrap();
        assert!(list.commands.contains(&DrawCommand::PushTransform {
            translate: food.position,
            scale: 0.0
        }));
    }

    #[test]
    fn pulse_breathes_around_growth() {
        assert_eq!(food_pulse(0.0, 1.0), 1.0);
        let peak = food_pulse(200.0 * std::f64::consts::FRAC_PI_2, 1.0);
        assert!((peak - 1.1).abs() < 1e-5);
        assert_eq!(food_pulse(123.0, 0.0), 0.0);
    }

    #[test]
    fn eat_adds_effects_layers_in_order() {
        let mut g = game();
        g.place_food(g.snake().head());
        g.advance(&FrameInput::at(16.0));
        let list = build_draw_list(&g, 16.0);

        let first_text = list
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { font, .. } if font.family == FontFamily::Monospace))
            .unwrap();
        let spine = list
            .iter()
            .position(|c| matches!(c, DrawCommand::Polyline { .. }))
            .unwrap();
        let first_particle_alpha = list
            .iter()
            .position(|c| matches!(c, DrawCommand::SetAlpha { alpha } if *alpha < 1.0))
            .unwrap();
        assert!(first_particle_alpha < spine);
        assert!(spine < first_text);

        // Main line, then the translation 25 px below in slate.
        match (&list.commands[first_text], &list.commands[first_text + 1]) {
            (
                DrawCommand::Text { position: a, color: ca, .. },
                DrawCommand::Text { position: b, color: cb, .. },
            ) => {
                assert_eq!(*b, *a + Vec2::new(0.0, 25.0));
                assert_eq!(*ca, g.theme().particle_color);
                assert_eq!(*cb, Rgba::SLATE_200);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn no_target_marker_without_hand() {
        let g = game();
        let list = build_draw_list(&g, 0.0);
        assert!(!list.iter().any(|c| matches!(c, DrawCommand::Ring { .. })));
    }

    #[test]
    fn applied_theme_colors_reach_the_frame() {
        let mut g = game();
        let mut theme = default_theme();
        theme.head_color = Rgba::rgb(1, 2, 3);
        theme.body_color = Rgba::rgb(4, 5, 6);
        theme.background_color = Rgba::rgb(7, 8, 9);
        g.apply_theme(theme);
        let list = build_draw_list(&g, 0.0);
        assert_eq!(list.commands[0], DrawCommand::Clear { color: Rgba::rgb(7, 8, 9).with_alpha(0xE6) });
        let discs = circles(&list);
        assert_eq!(discs.last().unwrap().2, Rgba::rgb(1, 2, 3));
        assert_eq!(discs[0].2, Rgba::rgb(4, 5, 6));
    }
}
