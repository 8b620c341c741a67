//! Web Speech and WebAudio output.

use serpent_engine::{ChimeSpec, VoiceInfo, VoicePreference};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AudioContext, AudioContextState, OscillatorType, SpeechSynthesis, SpeechSynthesisUtterance,
    SpeechSynthesisVoice,
};

use crate::runner::SpeechOutput;

/// Browser speech synthesis plus a lazily created audio context for chimes.
///
/// Missing browser support degrades to silence; nothing here can stop the
/// frame loop.
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
    audio: Option<AudioContext>,
    preference: VoicePreference,
}

impl WebSpeech {
    pub fn new(preference: VoicePreference) -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speech synthesis unavailable, vocabulary will not be spoken");
        }
        Self {
            synth,
            audio: None,
            preference,
        }
    }

    fn voices(synth: &SpeechSynthesis) -> Vec<SpeechSynthesisVoice> {
        synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }

    fn try_speak(&self, synth: &SpeechSynthesis, text: &str) -> Result<(), JsValue> {
        let voices = Self::voices(synth);
        let infos: Vec<VoiceInfo> = voices
            .iter()
            .map(|v| VoiceInfo::new(&v.name(), &v.lang()))
            .collect();
        let plan = self.preference.plan(text, &infos);

        if plan.cancel_pending {
            synth.cancel();
        }
        let utterance = SpeechSynthesisUtterance::new_with_text(&plan.text)?;
        if let Some(i) = plan.voice_index {
            utterance.set_voice(voices.get(i));
        }
        utterance.set_lang(&plan.lang);
        utterance.set_rate(plan.rate);
        utterance.set_pitch(plan.pitch);
        synth.speak(&utterance);
        Ok(())
    }

    fn audio_context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.audio.is_none() {
            self.audio = Some(AudioContext::new()?);
        }
        self.audio
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio context unavailable"))
    }

    fn try_chime(&mut self, spec: ChimeSpec) -> Result<(), JsValue> {
        let ctx = self.audio_context()?;
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let now = ctx.current_time();
        osc.set_type(OscillatorType::Sine);
        let freq = osc.frequency();
        freq.set_value_at_time(spec.start_hz, now)?;
        freq.exponential_ramp_to_value_at_time(spec.end_hz, now + spec.sweep_secs as f64)?;

        let volume = gain.gain();
        volume.set_value_at_time(spec.start_gain, now)?;
        volume.linear_ramp_to_value_at_time(0.0, now + spec.duration_secs as f64)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(now + spec.duration_secs as f64)?;
        Ok(())
    }

    fn try_unlock(&mut self) -> Result<(), JsValue> {
        let ctx = self.audio_context()?;
        if ctx.state() == AudioContextState::Suspended {
            // The returned promise settles on its own.
            let _ = ctx.resume()?;
        }
        if let Some(synth) = &self.synth {
            // An empty utterance inside the gesture unlocks speech on iOS.
            synth.speak(&SpeechSynthesisUtterance::new_with_text("")?);
        }
        Ok(())
    }
}

impl SpeechOutput for WebSpeech {
    fn speak(&mut self, text: &str) {
        let Some(synth) = &self.synth else {
            return;
        };
        if let Err(e) = self.try_speak(synth, text) {
            log::warn!("speech failed: {:?}", e);
        }
    }

    fn chime(&mut self, spec: ChimeSpec) {
        if let Err(e) = self.try_chime(spec) {
            log::warn!("chime failed: {:?}", e);
        }
    }

    fn unlock(&mut self) {
        match self.try_unlock() {
            Ok(()) => log::info!("audio unlocked"),
            Err(e) => log::warn!("audio unlock failed: {:?}", e),
        }
    }
}
