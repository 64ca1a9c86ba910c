// ---------------- Native audio output (cpal) ----------------

use crate::synth::Voice;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use mosquito_core::{DeviceError, OutputDevice, WaveType};
use std::sync::{Arc, Mutex};

struct AudioState {
    sample_rate: f32,
    voice: Voice,
}

/// Output device backed by the default cpal host. The stream is built on
/// `open` and dropped on `close_device`; tones only flip state the callback
/// reads.
pub struct CpalDevice {
    state: Arc<Mutex<AudioState>>,
    stream: Option<cpal::Stream>,
    next_tone_id: u64,
}

pub struct CpalTone {
    id: u64,
}

impl Default for CpalDevice {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(AudioState {
                sample_rate: 48_000.0,
                voice: Voice::default(),
            })),
            stream: None,
            next_tone_id: 0,
        }
    }
}

impl CpalDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_voice(&self, tone: &CpalTone, f: impl FnOnce(&mut Voice)) {
        if let Ok(mut guard) = self.state.lock() {
            if guard.voice.tone_id == tone.id {
                f(&mut guard.voice);
            }
        }
    }
}

impl OutputDevice for CpalDevice {
    type Tone = CpalTone;

    fn open(&mut self) -> Result<(), DeviceError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| DeviceError::Unavailable("no default output device".into()))?;
        let config = device
            .default_output_config()
            .map_err(|e| DeviceError::Unavailable(e.to_string()))?;
        let channels = config.channels() as usize;
        if let Ok(mut guard) = self.state.lock() {
            guard.sample_rate = config.sample_rate().0 as f32;
        }
        log::info!(
            "[audio] {} @ {} Hz, {} ch, {:?}",
            device.name().unwrap_or_else(|_| "output".into()),
            config.sample_rate().0,
            channels,
            config.sample_format()
        );

        let err_fn = |err| log::error!("audio stream error: {err}");
        let state = Arc::clone(&self.state);
        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream(&device, &config.into(), channels, state, err_fn, |s: f32| s)
            }
            cpal::SampleFormat::I16 => {
                build_stream(&device, &config.into(), channels, state, err_fn, |s: f32| {
                    (s * i16::MAX as f32) as i16
                })
            }
            cpal::SampleFormat::U16 => {
                build_stream(&device, &config.into(), channels, state, err_fn, |s: f32| {
                    ((s * 0.5 + 0.5).clamp(0.0, 1.0) * u16::MAX as f32) as u16
                })
            }
            other => {
                return Err(DeviceError::Unavailable(format!(
                    "unsupported sample format {other}"
                )))
            }
        }
        .map_err(|e| DeviceError::Unavailable(e.to_string()))?;

        stream
            .play()
            .map_err(|e| DeviceError::Unavailable(e.to_string()))?;
        self.stream = Some(stream);
        Ok(())
    }

    fn create_tone_source(&mut self, wave: WaveType) -> Result<CpalTone, DeviceError> {
        if self.stream.is_none() {
            return Err(DeviceError::Source("output stream not open".into()));
        }
        self.next_tone_id += 1;
        let id = self.next_tone_id;
        let mut guard = self
            .state
            .lock()
            .map_err(|_| DeviceError::Source("audio state poisoned".into()))?;
        guard.voice.start(id, wave);
        Ok(CpalTone { id })
    }

    fn retune(&mut self, tone: &CpalTone, frequency_hz: u32) {
        self.with_voice(tone, |v| v.retune(frequency_hz as f32));
    }

    fn set_gain(&mut self, tone: &CpalTone, level: f32) {
        self.with_voice(tone, |v| v.target_gain = level.clamp(0.0, 1.0));
    }

    fn stop_and_release(&mut self, tone: CpalTone) {
        self.with_voice(&tone, Voice::release);
    }

    fn close_device(&mut self) {
        if let Some(stream) = self.stream.take() {
            _ = stream.pause();
        }
    }
}

fn build_stream<T: cpal::SizedSample + Send + 'static>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
    convert: impl Fn(f32) -> T + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError> {
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let Ok(mut guard) = state.lock() else {
                let silence = convert(0.0);
                data.iter_mut().for_each(|s| *s = silence);
                return;
            };
            let sample_rate = guard.sample_rate;
            for frame in data.chunks_mut(channels.max(1)) {
                let v = convert(guard.voice.next_sample(sample_rate));
                for s in frame.iter_mut() {
                    *s = v;
                }
            }
        },
        err_fn,
        None,
    )
}
