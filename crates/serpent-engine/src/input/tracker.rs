//! Hand tracking: turns the vision model's per-frame output into one steering
//! target in canvas space.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::FrameClock;

/// Points per detected hand in the landmark model.
pub const LANDMARKS_PER_HAND: usize = 21;
/// Index of the index-finger tip within a hand.
pub const INDEX_FINGER_TIP: usize = 8;

pub const STATUS_INITIALIZING: &str = "Initializing...";
pub const STATUS_VISION_READY: &str = "Vision Ready - Point at camera";
pub const STATUS_VISION_FAILED: &str = "Error loading vision model.";
pub const STATUS_CAMERA_DENIED: &str = "Camera access denied.";

/// Readiness of an asynchronously initialized collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Capability {
    #[default]
    Uninitialized,
    Ready,
    /// Terminal. There are no retries.
    Failed,
}

/// One normalized landmark: x and y in [0, 1] of the camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// All landmarks of one detected hand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandLandmarks {
    pub points: Vec<Landmark>,
}

impl HandLandmarks {
    /// The index fingertip, if this is a complete hand.
    pub fn fingertip(&self) -> Option<Landmark> {
        if self.points.len() < LANDMARKS_PER_HAND {
            return None;
        }
        self.points.get(INDEX_FINGER_TIP).copied()
    }
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("hand detector failed: {0}")]
    Failed(String),
    #[error("hand detector returned malformed landmarks: {0}")]
    Malformed(String),
}

/// Seam to the external vision model.
///
/// Called at most once per frame, only once both the camera and the model
/// report ready. Timestamps are strictly increasing.
pub trait HandDetector {
    fn detect(&mut self, timestamp_ms: f64) -> Result<Vec<HandLandmarks>, DetectError>;
}

/// Per-frame result of polling the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSample {
    pub hand_detected: bool,
    /// Last known target. Stale when `hand_detected` is false.
    pub target: Vec2,
}

/// Owns the steering target and the readiness of camera and vision.
pub struct InputTracker {
    camera: Capability,
    vision: Capability,
    target: Vec2,
    hand_detected: bool,
    clock: FrameClock,
    status: String,
}

impl InputTracker {
    /// Start with both capabilities pending and the target at `initial_target`.
    pub fn new(initial_target: Vec2) -> Self {
        Self {
            camera: Capability::Uninitialized,
            vision: Capability::Uninitialized,
            target: initial_target,
            hand_detected: false,
            clock: FrameClock::new(),
            status: STATUS_INITIALIZING.to_string(),
        }
    }

    pub fn camera(&self) -> Capability {
        self.camera
    }

    pub fn vision(&self) -> Capability {
        self.vision
    }

    pub fn is_tracking(&self) -> bool {
        self.camera == Capability::Ready && self.vision == Capability::Ready
    }

    pub fn hand_detected(&self) -> bool {
        self.hand_detected
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Latest human-readable status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Mark the camera ready. Returns the new status line if it changed.
    pub fn camera_ready(&mut self) -> Option<String> {
        if self.camera == Capability::Failed {
            log::debug!("camera ready after failure, ignoring");
            return None;
        }
        self.camera = Capability::Ready;
        log::info!("camera ready");
        None
    }

    pub fn camera_failed(&mut self, reason: &str) -> Option<String> {
        self.camera = Capability::Failed;
        log::error!("camera error: {}", reason);
        self.set_status(STATUS_CAMERA_DENIED)
    }

    pub fn vision_ready(&mut self) -> Option<String> {
        if self.vision == Capability::Failed {
            log::debug!("vision ready after failure, ignoring");
            return None;
        }
        self.vision = Capability::Ready;
        log::info!("hand landmark model loaded");
        self.set_status(STATUS_VISION_READY)
    }

    pub fn vision_failed(&mut self, reason: &str) -> Option<String> {
        self.vision = Capability::Failed;
        log::error!("failed to load hand landmark model: {}", reason);
        self.set_status(STATUS_VISION_FAILED)
    }

    fn set_status(&mut self, status: &str) -> Option<String> {
        if self.status == status {
            return None;
        }
        self.status = status.to_string();
        Some(self.status.clone())
    }

    /// Poll the detector for this frame.
    ///
    /// Does nothing (and reports no hand) unless both capabilities are ready
    /// and a detector is attached. A detector error counts as "no hand".
    pub fn poll<D: HandDetector + ?Sized>(
        &mut self,
        detector: Option<&mut D>,
        host_ms: f64,
        canvas: Vec2,
    ) -> TrackerSample {
        self.hand_detected = false;
        if let (true, Some(detector)) = (self.is_tracking(), detector) {
            let timestamp = self.clock.tick(host_ms);
            match detector.detect(timestamp) {
                Ok(hands) => {
                    if let Some(tip) = hands.first().and_then(HandLandmarks::fingertip) {
                        self.target = to_canvas(tip, canvas);
                        self.hand_detected = true;
                    }
                }
                Err(e) => log::warn!("{}", e),
            }
        }
        TrackerSample {
            hand_detected: self.hand_detected,
            target: self.target,
        }
    }
}

/// Map a normalized landmark to canvas pixels, mirrored horizontally so the
/// snake follows the player like a mirror image.
pub fn to_canvas(landmark: Landmark, canvas: Vec2) -> Vec2 {
    Vec2::new((1.0 - landmark.x) * canvas.x, landmark.y * canvas.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays scripted detector results, one per call.
    struct Scripted {
        frames: Vec<Result<Vec<HandLandmarks>, DetectError>>,
        timestamps: Vec<f64>,
    }

    impl Scripted {
        fn new(frames: Vec<Result<Vec<HandLandmarks>, DetectError>>) -> Self {
            Self { frames, timestamps: Vec::new() }
        }
    }

    impl HandDetector for Scripted {
        fn detect(&mut self, timestamp_ms: f64) -> Result<Vec<HandLandmarks>, DetectError> {
            self.timestamps.push(timestamp_ms);
            if self.frames.is_empty() {
                Ok(Vec::new())
            } else {
                self.frames.remove(0)
            }
        }
    }

    fn hand_with_tip(x: f32, y: f32) -> HandLandmarks {
        let mut points = vec![Landmark::default(); LANDMARKS_PER_HAND];
        points[INDEX_FINGER_TIP] = Landmark { x, y, z: 0.0 };
        HandLandmarks { points }
    }

    fn ready_tracker() -> InputTracker {
        let mut t = InputTracker::new(Vec2::new(400.0, 300.0));
        t.camera_ready();
        t.vision_ready();
        t
    }

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn center_landmark_maps_to_canvas_center() {
        let mut tracker = ready_tracker();
        let mut det = Scripted::new(vec![Ok(vec![hand_with_tip(0.5, 0.5)])]);
        let sample = tracker.poll(Some(&mut det), 16.0, CANVAS);
        assert!(sample.hand_detected);
        assert_eq!(sample.target, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn x_is_mirrored() {
        let mut tracker = ready_tracker();
        let mut det = Scripted::new(vec![Ok(vec![hand_with_tip(0.25, 0.1)])]);
        let sample = tracker.poll(Some(&mut det), 16.0, CANVAS);
        assert_eq!(sample.target, Vec2::new(600.0, 60.0));
    }

    #[test]
    fn no_hand_keeps_stale_target() {
        let mut tracker = ready_tracker();
        let mut det = Scripted::new(vec![Ok(vec![hand_with_tip(0.0, 0.0)]), Ok(vec![])]);
        tracker.poll(Some(&mut det), 16.0, CANVAS);
        let sample = tracker.poll(Some(&mut det), 32.0, CANVAS);
        assert!(!sample.hand_detected);
        assert_eq!(sample.target, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn not_polled_until_both_ready() {
        let mut tracker = InputTracker::new(Vec2::ZERO);
        let mut det = Scripted::new(vec![Ok(vec![hand_with_tip(0.5, 0.5)])]);
        tracker.vision_ready();
        let sample = tracker.poll(Some(&mut det), 16.0, CANVAS);
        assert!(!sample.hand_detected);
        assert!(det.timestamps.is_empty());
    }

    #[test]
    fn detector_error_means_no_hand() {
        let mut tracker = ready_tracker();
        let mut det = Scripted::new(vec![Err(DetectError::Failed("gpu lost".into()))]);
        let sample = tracker.poll(Some(&mut det), 16.0, CANVAS);
        assert!(!sample.hand_detected);
        assert_eq!(sample.target, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn short_landmark_set_is_ignored() {
        let mut tracker = ready_tracker();
        let short = HandLandmarks {
            points: vec![Landmark { x: 0.1, y: 0.1, z: 0.0 }; 9],
        };
        let mut det = Scripted::new(vec![Ok(vec![short])]);
        assert!(!tracker.poll(Some(&mut det), 16.0, CANVAS).hand_detected);
    }

    #[test]
    fn detector_timestamps_strictly_increase() {
        let mut tracker = ready_tracker();
        let mut det = Scripted::new(Vec::new());
        for t in [10.0, 10.0, 5.0, 20.0] {
            tracker.poll(Some(&mut det), t, CANVAS);
        }
        assert!(det.timestamps.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn status_follows_capabilities() {
        let mut tracker = InputTracker::new(Vec2::ZERO);
        assert_eq!(tracker.status(), STATUS_INITIALIZING);
        assert_eq!(tracker.vision_ready().as_deref(), Some(STATUS_VISION_READY));
        assert_eq!(tracker.camera_failed("NotAllowedError").as_deref(), Some(STATUS_CAMERA_DENIED));
        assert_eq!(tracker.camera(), Capability::Failed);
        // Failure is terminal.
        tracker.camera_ready();
        assert_eq!(tracker.camera(), Capability::Failed);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn landmarks_deserialize_from_plain_arrays() {
        let json = r#"[[{"x":0.1,"y":0.2,"z":0.0},{"x":0.3,"y":0.4}]]"#;
        let hands: Vec<HandLandmarks> = serde_json::from_str(json).unwrap();
        assert_eq!(hands[0].points.len(), 2);
        assert_eq!(hands[0].points[1].z, 0.0);
    }
}
