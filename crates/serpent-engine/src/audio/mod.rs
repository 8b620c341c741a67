pub mod chime;
pub mod voice;

pub use chime::ChimeSpec;
pub use voice::{SpeechPlan, VoiceInfo, VoicePreference};
