use serpent_engine::{
    build_draw_list, ChimeSpec, ConfigError, FrameInput, GameConfig, GameEvent, HandDetector,
    HostEvent, InputQueue, Painter, SnakeGame, Theme, ThemeError,
};

/// Events kept for `game_take_events_json` when the host never polls.
const MAX_OUTBOX: usize = 256;

/// Spoken and audible feedback.
pub trait SpeechOutput {
    /// Speak `text` in the target language, cutting off anything queued.
    fn speak(&mut self, text: &str);
    /// Play the eat chime.
    fn chime(&mut self, spec: ChimeSpec);
    /// Unlock audio output from inside a user gesture.
    fn unlock(&mut self);
}

/// Presentation callbacks (score display, status line).
pub trait Presenter {
    fn score_changed(&mut self, score: u32);
    fn status_changed(&mut self, status: &str);
}

/// Wires the engine loop to its host collaborators.
///
/// The host calls [`GameRunner::tick`] once per display frame. Host
/// notifications are queued and applied at the start of the next tick.
pub struct GameRunner {
    game: SnakeGame,
    input: InputQueue,
    painter: Option<Box<dyn Painter>>,
    speech: Option<Box<dyn SpeechOutput>>,
    presenter: Option<Box<dyn Presenter>>,
    outbox: Vec<GameEvent>,
}

impl GameRunner {
    pub fn new(game: SnakeGame) -> Self {
        Self {
            game,
            input: InputQueue::new(),
            painter: None,
            speech: None,
            presenter: None,
            outbox: Vec::new(),
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn set_painter(&mut self, painter: Box<dyn Painter>) {
        log::info!("painter attached: {}", painter.backend());
        self.painter = Some(painter);
    }

    pub fn set_speech(&mut self, speech: Box<dyn SpeechOutput>) {
        self.speech = Some(speech);
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = Some(presenter);
    }

    pub fn set_detector(&mut self, detector: Box<dyn HandDetector>) {
        self.game.set_detector(detector);
    }

    /// Queue a host notification for the next tick.
    pub fn push_host_event(&mut self, event: HostEvent) {
        self.input.push(event);
    }

    /// Validate and apply a theme. A rejected theme leaves the current one
    /// active.
    pub fn apply_theme_json(&mut self, json: &str) -> Result<(), ThemeError> {
        let theme = Theme::from_json(json)?;
        self.game.apply_theme(theme);
        Ok(())
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = GameConfig::from_json(json)?;
        self.game.reconfigure(config);
        Ok(())
    }

    /// Run one frame: apply host events, advance the game, dispatch its
    /// events, paint.
    pub fn tick(&mut self, timestamp_ms: f64) {
        for event in self.input.drain() {
            if let (HostEvent::Resize { width, height }, Some(painter)) =
                (&event, self.painter.as_mut())
            {
                painter.resize(*width as u32, *height as u32);
            }
            self.game.handle_host_event(event);
        }

        let events = self.game.advance(&FrameInput::at(timestamp_ms));
        for event in &events {
            self.dispatch(event);
        }
        self.outbox.extend(events);
        if self.outbox.len() > MAX_OUTBOX {
            let excess = self.outbox.len() - MAX_OUTBOX;
            self.outbox.drain(..excess);
        }

        if let Some(painter) = self.painter.as_mut() {
            painter.paint(&build_draw_list(&self.game, timestamp_ms));
        }
    }

    fn dispatch(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ScoreChanged { score, .. } => {
                if let Some(p) = self.presenter.as_mut() {
                    p.score_changed(*score);
                }
            }
            GameEvent::StatusChanged { status } => {
                if let Some(p) = self.presenter.as_mut() {
                    p.status_changed(status);
                }
            }
            GameEvent::Speak { text } => {
                if let Some(s) = self.speech.as_mut() {
                    s.speak(text);
                }
            }
            GameEvent::Chime { pitch } => {
                if let Some(s) = self.speech.as_mut() {
                    s.chime(ChimeSpec::for_pitch(*pitch));
                }
            }
            GameEvent::FoodSpawned { .. } | GameEvent::ThemeApplied { .. } => {}
        }
    }

    pub fn unlock_audio(&mut self) {
        match self.speech.as_mut() {
            Some(s) => s.unlock(),
            None => log::debug!("audio unlock requested with no speech output"),
        }
    }

    /// Serialize and clear the events accumulated since the last call.
    pub fn take_events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.outbox);
        match serde_json::to_string(&events) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize game events: {}", e);
                "[]".to_string()
            }
        }
    }
}
