//! Single-voice oscillator rendered inside the cpal callback.

use mosquito_core::WaveType;
use std::f32::consts::TAU;

// One-pole gain smoothing per sample; ~20 ms time constant at 48 kHz.
const GAIN_SMOOTHING: f32 = 0.001;
// Below this the voice is considered silent once released.
const SILENCE_EPSILON: f32 = 1e-4;

/// Sample of `wave` at normalized phase `[0, 1)`, in `[-1, 1]`.
pub fn render_wave_sample(phase: f32, wave: WaveType) -> f32 {
    match wave {
        WaveType::Sine => (phase * TAU).sin(),
        WaveType::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        WaveType::Sawtooth => 2.0 * phase - 1.0,
        WaveType::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
    }
}

#[derive(Clone, Debug)]
pub struct Voice {
    pub tone_id: u64,
    pub wave: WaveType,
    pub frequency_hz: f32,
    pub phase: f32,
    pub gain: f32,
    pub target_gain: f32,
    pub active: bool,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            tone_id: 0,
            wave: WaveType::Sine,
            frequency_hz: 0.0,
            phase: 0.0,
            gain: 0.0,
            target_gain: 0.0,
            active: false,
        }
    }
}

impl Voice {
    /// Begin a new tone. Phase restarts at zero; a tail still fading out keeps
    /// its current gain and ramps from there.
    pub fn start(&mut self, tone_id: u64, wave: WaveType) {
        *self = Self {
            tone_id,
            wave,
            active: true,
            gain: self.gain,
            ..Self::default()
        };
    }

    /// Change pitch without touching phase so the waveform stays continuous.
    pub fn retune(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz;
    }

    pub fn release(&mut self) {
        self.active = false;
        self.target_gain = 0.0;
    }

    pub fn is_audible(&self) -> bool {
        self.active || self.gain > SILENCE_EPSILON
    }

    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        if !self.is_audible() {
            self.gain = 0.0;
            return 0.0;
        }
        self.gain += (self.target_gain - self.gain) * GAIN_SMOOTHING;
        let out = render_wave_sample(self.phase, self.wave) * self.gain;
        self.phase = (self.phase + self.frequency_hz / sample_rate).fract();
        out
    }
}
