/// Notifications from the host page.
///
/// Camera and vision setup run asynchronously on the host; their outcome
/// arrives here and is applied at the start of the next frame.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The canvas was resized to (width, height) pixels.
    Resize { width: f32, height: f32 },
    /// The camera stream is live.
    CameraReady,
    /// Camera access was refused or failed.
    CameraFailed { reason: String },
    /// The hand-landmark model finished loading.
    VisionReady,
    /// The hand-landmark model failed to load.
    VisionFailed { reason: String },
}

/// A queue of host events.
/// JS writes events into the queue; Rust drains them each frame.
pub struct InputQueue {
    events: Vec<HostEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
