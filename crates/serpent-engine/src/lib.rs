pub mod api;
pub mod assets;
pub mod audio;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, GameConfig};
pub use api::game::SnakeGame;
pub use api::types::{FrameInput, GameEvent};
pub use assets::color::Rgba;
pub use assets::default_theme::default_theme;
pub use assets::request::{RequestError, ThemeRequest};
pub use assets::theme::{Theme, ThemeError, ThemeSpec, VocabularyItem};
pub use audio::{ChimeSpec, SpeechPlan, VoiceInfo, VoicePreference};
pub use core::snake::Snake;
pub use core::time::FrameClock;
pub use input::queue::{HostEvent, InputQueue};
pub use input::tracker::{
    Capability, DetectError, HandDetector, HandLandmarks, InputTracker, Landmark,
};
pub use renderer::{DrawCommand, DrawList, Painter};
pub use systems::effects::{EffectsState, FloatingText, Particle, Rng};
pub use systems::locomotion::{Locomotion, MotionMode};
pub use systems::progression::{Combo, Food};
pub use systems::render::build_draw_list;
