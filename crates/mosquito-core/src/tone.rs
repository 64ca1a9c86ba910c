//! Lifecycle of the single continuous tone.
//!
//! `ToneEngine` owns an `OutputDevice` and at most one live tone on it. The
//! device is opened lazily on the first `play_at` and closed on `teardown`.

use crate::constants::TONE_GAIN;
use crate::settings::WaveType;
use instant::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error("failed to create tone source: {0}")]
    Source(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToneError {
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error("tone engine has been torn down")]
    Terminated,
}

/// Audio output collaborator. `Tone` is whatever the platform needs to keep a
/// running oscillator and its gain stage alive.
pub trait OutputDevice {
    type Tone;

    /// Acquire the underlying output (audio context, stream). Called at most
    /// once per successful acquisition.
    fn open(&mut self) -> Result<(), DeviceError>;
    /// Start a silent oscillator of the given shape routed to the output.
    fn create_tone_source(&mut self, wave: WaveType) -> Result<Self::Tone, DeviceError>;
    fn retune(&mut self, tone: &Self::Tone, frequency_hz: u32);
    fn set_gain(&mut self, tone: &Self::Tone, level: f32);
    fn stop_and_release(&mut self, tone: Self::Tone);
    fn close_device(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Playing,
    Terminated,
}

pub struct ToneHandle<T> {
    pub wave_type: WaveType,
    pub current_frequency: u32,
    pub started_at: Instant,
    tone: T,
}

pub struct ToneEngine<D: OutputDevice> {
    device: D,
    wave_type: WaveType,
    opened: bool,
    terminated: bool,
    active: Option<ToneHandle<D::Tone>>,
}

impl<D: OutputDevice> ToneEngine<D> {
    pub fn new(device: D, wave_type: WaveType) -> Self {
        Self {
            device,
            wave_type,
            opened: false,
            terminated: false,
            active: None,
        }
    }

    pub fn state(&self) -> EngineState {
        if self.terminated {
            EngineState::Terminated
        } else if self.active.is_some() {
            EngineState::Playing
        } else {
            EngineState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_frequency(&self) -> Option<u32> {
        self.active.as_ref().map(|h| h.current_frequency)
    }

    pub fn handle(&self) -> Option<&ToneHandle<D::Tone>> {
        self.active.as_ref()
    }

    /// Start the tone at `frequency_hz`, or retune the running one in place.
    pub fn play_at(&mut self, frequency_hz: u32) -> Result<(), ToneError> {
        if self.terminated {
            return Err(ToneError::Terminated);
        }
        if let Some(handle) = self.active.as_mut() {
            if handle.current_frequency != frequency_hz {
                self.device.retune(&handle.tone, frequency_hz);
                handle.current_frequency = frequency_hz;
            }
            return Ok(());
        }

        if !self.opened {
            self.device.open()?;
            self.opened = true;
            log::info!("[tone] output device acquired");
        }
        let tone = self.device.create_tone_source(self.wave_type)?;
        self.device.retune(&tone, frequency_hz);
        self.device.set_gain(&tone, TONE_GAIN);
        log::debug!("[tone] start {} at {}Hz", self.wave_type, frequency_hz);
        self.active = Some(ToneHandle {
            wave_type: self.wave_type,
            current_frequency: frequency_hz,
            started_at: Instant::now(),
            tone,
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            log::debug!(
                "[tone] stop after {} ms at {}Hz",
                handle.started_at.elapsed().as_millis(),
                handle.current_frequency
            );
            self.device.stop_and_release(handle.tone);
        }
    }

    /// Release the output device. No further tones can be played.
    pub fn teardown(&mut self) {
        if self.terminated {
            return;
        }
        self.stop();
        if self.opened {
            self.device.close_device();
            self.opened = false;
            log::info!("[tone] output device released");
        }
        self.terminated = true;
    }
}
