//! WASM bridge for Serpent Lingo.
//!
//! The host page owns the camera, the vision model and the animation frame
//! loop. It calls [`game_init`] once, attaches a canvas and a detector
//! function, reports camera/vision readiness as it happens, and calls
//! [`game_tick`] from `requestAnimationFrame`. After [`game_dispose`] every
//! export is a logged no-op.

pub mod bridge;
pub mod canvas;
pub mod runner;
pub mod speech;

use std::cell::{Cell, RefCell};

use js_sys::Function;
use serpent_engine::{
    default_theme, ConfigError, GameConfig, HostEvent, SnakeGame, ThemeError, ThemeRequest,
    VoicePreference,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use runner::{GameRunner, Presenter, SpeechOutput};

use bridge::{JsHandDetector, JsPresenter};
use canvas::Canvas2dPainter;
use speech::WebSpeech;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
    /// Set when `game_dispose` arrives while a call holds the runner.
    static DISPOSE_REQUESTED: Cell<bool> = Cell::new(false);
}

/// Why an export did not reach the game.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("no active game")]
    NoGame,
    #[error("game is busy in a host callback")]
    Busy,
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run `f` against the live runner. Calls arriving before init, after
/// dispose, or from inside a host callback during a tick are dropped.
fn with_runner<R>(call: &str, f: impl FnOnce(&mut GameRunner) -> R) -> Result<R, CallError> {
    finish_pending_dispose();
    let result = RUNNER.with(|cell| {
        let Ok(mut borrow) = cell.try_borrow_mut() else {
            log::warn!("{}: re-entrant call from a host callback, ignoring", call);
            return Err(CallError::Busy);
        };
        match borrow.as_mut() {
            Some(runner) => Ok(f(runner)),
            None => {
                log::debug!("{}: no active game, ignoring", call);
                Err(CallError::NoGame)
            }
        }
    });
    finish_pending_dispose();
    result
}

/// Drop the runner unless a call is using it. Returns false when busy.
fn try_dispose() -> bool {
    RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if slot.take().is_some() {
                log::info!("serpent-lingo: disposed");
            }
            true
        }
        Err(_) => false,
    })
}

fn finish_pending_dispose() {
    if DISPOSE_REQUESTED.with(Cell::get) && try_dispose() {
        DISPOSE_REQUESTED.with(|flag| flag.set(false));
    }
}

fn install(runner: GameRunner) -> bool {
    RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            *slot = Some(runner);
            true
        }
        Err(_) => {
            log::warn!("game_init: re-entrant call from a host callback, ignoring");
            false
        }
    })
}

fn apply_theme_json(json: &str) -> Result<(), CallError> {
    Ok(with_runner("game_apply_theme_json", |r| r.apply_theme_json(json))??)
}

fn load_config_json(json: &str) -> Result<(), CallError> {
    Ok(with_runner("game_load_config", |r| r.load_config_json(json))??)
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = GameRunner::new(SnakeGame::new(GameConfig::default(), default_theme()));
    runner.set_speech(Box::new(WebSpeech::new(VoicePreference::default())));

    if install(runner) {
        log::info!("serpent-lingo: initialized");
    }
}

#[wasm_bindgen]
pub fn game_attach_canvas(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let painter = Canvas2dPainter::new(canvas)?;
    with_runner("game_attach_canvas", |r| r.set_painter(Box::new(painter))).map_err(js_err)
}

#[wasm_bindgen]
pub fn game_tick(timestamp_ms: f64) {
    let _ = with_runner("game_tick", |r| r.tick(timestamp_ms));
}

#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) {
    let _ = with_runner("game_resize", |r| {
        r.push_host_event(HostEvent::Resize { width, height })
    });
}

#[wasm_bindgen]
pub fn game_camera_ready() {
    let _ = with_runner("game_camera_ready", |r| r.push_host_event(HostEvent::CameraReady));
}

#[wasm_bindgen]
pub fn game_camera_failed(reason: &str) {
    let _ = with_runner("game_camera_failed", |r| {
        r.push_host_event(HostEvent::CameraFailed {
            reason: reason.to_string(),
        })
    });
}

#[wasm_bindgen]
pub fn game_vision_ready() {
    let _ = with_runner("game_vision_ready", |r| r.push_host_event(HostEvent::VisionReady));
}

#[wasm_bindgen]
pub fn game_vision_failed(reason: &str) {
    let _ = with_runner("game_vision_failed", |r| {
        r.push_host_event(HostEvent::VisionFailed {
            reason: reason.to_string(),
        })
    });
}

/// Register `detect(timestampMs) -> landmarks | null`.
#[wasm_bindgen]
pub fn game_set_detector(detect: Function) {
    let _ = with_runner("game_set_detector", |r| {
        r.set_detector(Box::new(JsHandDetector::new(detect)))
    });
}

/// Register `onScore(score)` and `onStatus(text)`. Either may be omitted.
#[wasm_bindgen]
pub fn game_set_callbacks(on_score: Option<Function>, on_status: Option<Function>) {
    let _ = with_runner("game_set_callbacks", |r| {
        r.set_presenter(Box::new(JsPresenter {
            on_score,
            on_status,
        }))
    });
}

/// Apply a theme given as JSON. On error the current theme stays active,
/// including when no game is running to receive it.
#[wasm_bindgen]
pub fn game_apply_theme_json(json: &str) -> Result<(), JsValue> {
    apply_theme_json(json).map_err(js_err)
}

/// Replace tuning constants from JSON; missing fields take their defaults.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> Result<(), JsValue> {
    load_config_json(json).map_err(js_err)
}

/// Events raised since the last call, as a JSON array.
#[wasm_bindgen]
pub fn game_take_events_json() -> String {
    with_runner("game_take_events_json", |r| r.take_events_json())
        .unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub fn game_score() -> u32 {
    with_runner("game_score", |r| r.game().score()).unwrap_or(0)
}

/// Call from the first click or touch so audio is allowed to play.
#[wasm_bindgen]
pub fn audio_unlock() {
    let _ = with_runner("audio_unlock", |r| r.unlock_audio());
}

/// Tear the game down. From inside a host callback the runner is released
/// once the current call returns.
#[wasm_bindgen]
pub fn game_dispose() {
    if !try_dispose() {
        log::info!("game_dispose: game is mid-frame, disposing after it");
        DISPOSE_REQUESTED.with(|flag| flag.set(true));
    }
}

// ---- Theme generation helpers ----

/// Prompt text for generating a theme about `topic`.
#[wasm_bindgen]
pub fn theme_generation_prompt(topic: &str) -> Result<String, JsValue> {
    Ok(ThemeRequest::new(topic).map_err(js_err)?.prompt())
}

/// JSON schema the generated theme must follow.
#[wasm_bindgen]
pub fn theme_response_schema(topic: &str) -> Result<String, JsValue> {
    let request = ThemeRequest::new(topic).map_err(js_err)?;
    Ok(request.response_schema().to_string())
}

/// The built-in theme as JSON.
#[wasm_bindgen]
pub fn default_theme_json() -> Result<String, JsValue> {
    serde_json::to_string(&default_theme().to_spec()).map_err(js_err)
}
