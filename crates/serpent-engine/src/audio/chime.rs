/// Envelope of the short tone played on every eat.
///
/// A sine sweep from `start_hz` up to `end_hz` over `sweep_secs`, with the
/// gain falling linearly from `start_gain` to silence over `duration_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub sweep_secs: f32,
    pub start_gain: f32,
    pub duration_secs: f32,
}

impl ChimeSpec {
    const BASE_HZ: f32 = 500.0;
    const HZ_PER_PITCH: f32 = 50.0;
    const SWEEP_RATIO: f32 = 1.5;

    pub fn for_pitch(pitch: f32) -> Self {
        let start_hz = Self::BASE_HZ + pitch * Self::HZ_PER_PITCH;
        ChimeSpec {
            start_hz,
            end_hz: start_hz * Self::SWEEP_RATIO,
            sweep_secs: 0.1,
            // Quiet enough to sit under the speech.
            start_gain: 0.05,
            duration_secs: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_pitch_chime() {
        let c = ChimeSpec::for_pitch(1.0);
        assert_eq!(c.start_hz, 550.0);
        assert_eq!(c.end_hz, 825.0);
        assert_eq!(c.sweep_secs, 0.1);
        assert_eq!(c.start_gain, 0.05);
        assert_eq!(c.duration_secs, 0.2);
    }

    #[test]
    fn pitch_raises_base_frequency() {
        assert_eq!(ChimeSpec::for_pitch(3.0).start_hz, 650.0);
        assert!(ChimeSpec::for_pitch(2.0).end_hz > ChimeSpec::for_pitch(1.0).end_hz);
    }
}
