use glam::Vec2;
use serde::Serialize;

/// Per-frame input from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Host frame timestamp in milliseconds.
    pub now_ms: f64,
}

impl FrameInput {
    pub fn at(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

/// A game event for the presentation layer.
///
/// `SnakeGame::advance` returns the events raised during that frame in the
/// order they happened. Serialized with an internal `type` tag for hosts that
/// poll events as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// The score changed. Score is +1 per eat regardless of combo.
    #[serde(rename_all = "camelCase")]
    ScoreChanged { score: u32, combo: u32 },
    /// Speak this text aloud in the target language.
    Speak { text: String },
    /// Play the eat chime.
    Chime { pitch: f32 },
    /// The status line shown to the player changed.
    StatusChanged { status: String },
    /// A new food appeared.
    #[serde(rename_all = "camelCase")]
    FoodSpawned { x: f32, y: f32, target_text: String },
    /// A theme was applied and the session reset.
    ThemeApplied { name: String },
}

impl GameEvent {
    pub fn food_spawned(position: Vec2, target_text: &str) -> Self {
        GameEvent::FoodSpawned {
            x: position.x,
            y: position.y,
            target_text: target_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&GameEvent::ScoreChanged { score: 3, combo: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"scoreChanged","score":3,"combo":2}"#);

        let json = serde_json::to_string(&GameEvent::Speak { text: "蘋果".into() }).unwrap();
        assert_eq!(json, r#"{"type":"speak","text":"蘋果"}"#);

        let json =
            serde_json::to_string(&GameEvent::food_spawned(Vec2::new(1.0, 2.0), "魚")).unwrap();
        assert_eq!(json, r#"{"type":"foodSpawned","x":1.0,"y":2.0,"targetText":"魚"}"#);
    }
}
