use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{FrameInput, GameEvent};
use crate::assets::theme::Theme;
use crate::core::snake::Snake;
use crate::input::queue::HostEvent;
use crate::input::tracker::{HandDetector, InputTracker};
use crate::systems::effects::{BurstSpec, EffectsState, Rng};
use crate::systems::locomotion::{Locomotion, MotionMode};
use crate::systems::progression::{spawn_food, Combo, Food};

/// The single active game session.
///
/// Everything the frame loop touches lives here and is mutated only through
/// `&mut self`, once per frame, by [`SnakeGame::advance`].
pub struct SnakeGame {
    config: GameConfig,
    theme: Theme,
    canvas: Vec2,
    snake: Snake,
    locomotion: Locomotion,
    tracker: InputTracker,
    detector: Option<Box<dyn HandDetector>>,
    food: Option<Food>,
    score: u32,
    combo: Combo,
    effects: EffectsState,
    rng: Rng,
    /// Events raised outside `advance` (theme changes, host notifications),
    /// delivered with the next frame's events.
    pending: Vec<GameEvent>,
}

impl SnakeGame {
    pub fn new(config: GameConfig, theme: Theme) -> Self {
        let canvas = Vec2::new(config.canvas_width, config.canvas_height);
        let center = canvas * 0.5;
        let mut game = Self {
            snake: Snake::new(config.initial_length, center),
            locomotion: Locomotion::new(),
            tracker: InputTracker::new(center),
            detector: None,
            food: None,
            score: 0,
            combo: Combo::default(),
            effects: EffectsState::new(),
            rng: Rng::new(config.seed),
            pending: Vec::new(),
            canvas,
            theme,
            config,
        };
        game.respawn_food();
        log::info!(
            "serpent game started: theme \"{}\", canvas {}x{}",
            game.theme.name,
            canvas.x,
            canvas.y
        );
        game
    }

    /// Swap in a new theme and reset the session: snake, food, effects,
    /// score and combo. Capability state and the attached detector survive.
    pub fn apply_theme(&mut self, theme: Theme) {
        log::info!(
            "applying theme \"{}\" ({} words)",
            theme.name,
            theme.vocabulary.len()
        );
        self.theme = theme;
        self.reset();
        self.pending.push(GameEvent::ThemeApplied {
            name: self.theme.name.clone(),
        });
        self.pending.push(GameEvent::ScoreChanged { score: 0, combo: 0 });
    }

    /// Replace the tuning constants and restart the session with the same
    /// theme. The RNG is reseeded; the canvas keeps its current size.
    pub fn reconfigure(&mut self, config: GameConfig) {
        log::info!("reconfiguring game (seed {})", config.seed);
        self.rng = Rng::new(config.seed);
        self.config = config;
        self.reset();
        self.pending.push(GameEvent::ScoreChanged { score: 0, combo: 0 });
    }

    fn reset(&mut self) {
        let center = self.canvas * 0.5;
        self.snake = Snake::new(self.config.initial_length, center);
        self.locomotion = Locomotion::new();
        self.effects.clear();
        self.score = 0;
        self.combo.reset();
        self.respawn_food();
    }

    /// Canvas bounds change; existing coordinates are not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.canvas = Vec2::new(width, height);
        log::debug!("canvas resized to {}x{}", width, height);
    }

    /// Attach the vision model adapter. Replaces any previous one.
    pub fn set_detector(&mut self, detector: Box<dyn HandDetector>) {
        self.detector = Some(detector);
    }

    /// Apply one host notification.
    pub fn handle_host_event(&mut self, event: HostEvent) {
        let status = match event {
            HostEvent::Resize { width, height } => {
                self.resize(width, height);
                None
            }
            HostEvent::CameraReady => self.tracker.camera_ready(),
            HostEvent::CameraFailed { reason } => self.tracker.camera_failed(&reason),
            HostEvent::VisionReady => self.tracker.vision_ready(),
            HostEvent::VisionFailed { reason } => self.tracker.vision_failed(&reason),
        };
        if let Some(status) = status {
            self.pending.push(GameEvent::StatusChanged { status });
        }
    }

    /// Run one frame: poll the tracker, move, eat, advance effects.
    /// Returns every event raised since the previous call.
    pub fn advance(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);

        let sample = self
            .tracker
            .poll(self.detector.as_deref_mut(), input.now_ms, self.canvas);
        let mode = if sample.hand_detected {
            MotionMode::Seeking {
                target: sample.target,
            }
        } else {
            MotionMode::Wandering
        };

        // The eat test uses where the head was before this frame's move.
        let head_before = self.snake.head();
        self.locomotion.step(
            &mut self.snake,
            mode,
            self.canvas,
            &self.config,
            &mut self.rng,
        );

        self.check_food(head_before, input.now_ms, &mut events);

        self.effects.tick(
            self.config.particle_decay,
            self.config.text_rise,
            self.config.text_decay,
        );
        events
    }

    fn check_food(&mut self, head: Vec2, now_ms: f64, events: &mut Vec<GameEvent>) {
        let Some(food) = self.food.as_mut() else {
            return;
        };
        food.grow(self.config.food_grow_rate);
        if !food.is_eaten_by(head, self.config.eat_radius()) {
            return;
        }

        let combo = self.combo.register(now_ms, self.config.combo_timeout_ms);
        self.score += 1;
        events.push(GameEvent::ScoreChanged {
            score: self.score,
            combo,
        });

        let vocab = food.vocab.clone();
        let at = food.position;
        log::debug!(
            "ate {} ({}), score {}, combo {}",
            vocab.target_text,
            vocab.translation,
            self.score,
            combo
        );
        events.push(GameEvent::Speak {
            text: vocab.target_text.clone(),
        });
        events.push(GameEvent::Chime {
            pitch: self.config.chime_pitch,
        });

        let burst = BurstSpec {
            count: self.config.particle_count,
            speed_min: self.config.particle_speed_min,
            speed_max: self.config.particle_speed_max,
        };
        self.effects
            .spawn_burst(at, burst, self.theme.particle_color, &mut self.rng);
        self.effects.spawn_text(
            at,
            &vocab.phonetic,
            Some(&vocab.translation),
            self.theme.particle_color,
            self.config.text_size,
        );

        self.snake.grow(self.config.growth_per_eat);
        if let Some(food) = self.respawn_food() {
            events.push(GameEvent::food_spawned(food.position, &food.vocab.target_text));
        }
    }

    /// Replace the current food with a fresh one. Leaves no food when the
    /// vocabulary is empty.
    fn respawn_food(&mut self) -> Option<&Food> {
        self.food = spawn_food(
            &self.theme.vocabulary,
            self.canvas,
            self.config.food_padding,
            &mut self.rng,
        );
        if self.food.is_none() {
            log::warn!("theme \"{}\" has no vocabulary, no food spawned", self.theme.name);
        }
        self.food.as_ref()
    }

    // -- Read-only accessors for the renderer and host --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> Combo {
        self.combo
    }

    pub fn effects(&self) -> &EffectsState {
        &self.effects
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Mutable access for scripted scenarios.
    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: Vec2) {
        if let Some(food) = self.food.as_mut() {
            food.position = position;
        }
    }

    #[cfg(test)]
    pub(crate) fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }
}
