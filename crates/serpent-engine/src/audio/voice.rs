//! Voice selection for spoken vocabulary.
//!
//! The platform speech engine is outside the engine; this module decides
//! *what* to ask it for. The web crate feeds in the browser's voice list and
//! realizes the resulting [`SpeechPlan`].

use serde::{Deserialize, Serialize};

/// Speaking rate for learners, slightly slower than normal.
pub const SPEECH_RATE: f32 = 0.9;
/// Slightly raised pitch for clarity.
pub const SPEECH_PITCH: f32 = 1.1;

/// A voice offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP 47 tag, e.g. `zh-HK`.
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: &str, lang: &str) -> Self {
        Self {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }
}

/// Locale preference, tried in order: exact region, related region,
/// language-family prefix. With no match the utterance is only tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePreference {
    pub exact: String,
    pub related: String,
    pub family: String,
}

impl Default for VoicePreference {
    /// Cantonese: Hong Kong, then Taiwan, then any Chinese voice.
    fn default() -> Self {
        Self {
            exact: "zh-HK".to_string(),
            related: "zh-TW".to_string(),
            family: "zh".to_string(),
        }
    }
}

/// Everything needed to issue one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPlan {
    pub text: String,
    /// Index into the voice list that was searched, if one matched.
    pub voice_index: Option<usize>,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    /// Drop anything still queued before speaking.
    pub cancel_pending: bool,
}

impl VoicePreference {
    /// Pick the best voice, returning its index in `voices`.
    pub fn choose(&self, voices: &[VoiceInfo]) -> Option<usize> {
        voices
            .iter()
            .position(|v| v.lang == self.exact)
            .or_else(|| voices.iter().position(|v| v.lang == self.related))
            .or_else(|| voices.iter().position(|v| v.lang.starts_with(&self.family)))
    }

    /// Build the utterance for `text`.
    pub fn plan(&self, text: &str, voices: &[VoiceInfo]) -> SpeechPlan {
        let voice_index = self.choose(voices);
        let lang = match voice_index {
            Some(i) => voices[i].lang.clone(),
            None => {
                log::debug!("no {} voice installed, tagging utterance only", self.family);
                self.exact.clone()
            }
        };
        SpeechPlan {
            text: text.to_string(),
            voice_index,
            lang,
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            cancel_pending: true,
        }
    }
}
