//! Adapters from JavaScript callbacks to the engine's seams.

use js_sys::Function;
use serpent_engine::{DetectError, HandDetector, HandLandmarks};
use wasm_bindgen::JsValue;

use crate::runner::Presenter;

/// Hand detector backed by a JS function.
///
/// The function is called with the frame timestamp and must return the
/// model's `landmarks` array (one array of `{x, y, z}` per hand), or
/// `null`/`undefined` when the video has no frame yet.
pub struct JsHandDetector {
    detect: Function,
}

impl JsHandDetector {
    pub fn new(detect: Function) -> Self {
        Self { detect }
    }
}

impl HandDetector for JsHandDetector {
    fn detect(&mut self, timestamp_ms: f64) -> Result<Vec<HandLandmarks>, DetectError> {
        let result = self
            .detect
            .call1(&JsValue::NULL, &JsValue::from_f64(timestamp_ms))
            .map_err(|e| DetectError::Failed(format!("{:?}", e)))?;
        if result.is_null() || result.is_undefined() {
            return Ok(Vec::new());
        }
        let json: String = js_sys::JSON::stringify(&result)
            .map_err(|e| DetectError::Malformed(format!("{:?}", e)))?
            .into();
        serde_json::from_str(&json).map_err(|e| DetectError::Malformed(e.to_string()))
    }
}

/// Score and status callbacks registered by the host page.
#[derive(Default)]
pub struct JsPresenter {
    pub on_score: Option<Function>,
    pub on_status: Option<Function>,
}

impl JsPresenter {
    fn call(f: &Option<Function>, value: JsValue) {
        if let Some(f) = f {
            if let Err(e) = f.call1(&JsValue::NULL, &value) {
                log::warn!("host callback threw: {:?}", e);
            }
        }
    }
}

impl Presenter for JsPresenter {
    fn score_changed(&mut self, score: u32) {
        Self::call(&self.on_score, JsValue::from(score));
    }

    fn status_changed(&mut self, status: &str) {
        Self::call(&self.on_status, JsValue::from_str(status));
    }
}
