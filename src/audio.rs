use mosquito_core::{DeviceError, OutputDevice, WaveType};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// WebAudio output: one `AudioContext` per session, one oscillator -> gain ->
/// destination chain per tone.
#[derive(Default)]
pub struct WebAudioDevice {
    ctx: Option<web::AudioContext>,
}

pub struct WebTone {
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

fn js_err(label: &str, e: wasm_bindgen::JsValue) -> DeviceError {
    log::error!("{} error: {:?}", label, e);
    DeviceError::Source(format!("{}: {:?}", label, e))
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, DeviceError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| js_err(label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn oscillator_type(wave: WaveType) -> web::OscillatorType {
    match wave {
        WaveType::Sine => web::OscillatorType::Sine,
        WaveType::Square => web::OscillatorType::Square,
        WaveType::Triangle => web::OscillatorType::Triangle,
        WaveType::Sawtooth => web::OscillatorType::Sawtooth,
    }
}

// Browsers create contexts suspended until a user gesture; ask to resume and
// log if the page is still blocked.
fn resume_in_background(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() != web::AudioContextState::Suspended {
        return;
    }
    match audio_ctx.resume() {
        Ok(promise) => watch_resume(promise),
        Err(e) => log::warn!("[audio] resume failed: {:?}", e),
    }
}

fn watch_resume(promise: js_sys::Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] resume rejected: {:?}", e);
        }
    });
}

impl WebAudioDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&self) -> Result<&web::AudioContext, DeviceError> {
        self.ctx
            .as_ref()
            .ok_or_else(|| DeviceError::Unavailable("audio context not open".into()))
    }
}

impl OutputDevice for WebAudioDevice {
    type Tone = WebTone;

    fn open(&mut self) -> Result<(), DeviceError> {
        let audio_ctx = web::AudioContext::new()
            .map_err(|e| DeviceError::Unavailable(format!("{:?}", e)))?;
        resume_in_background(&audio_ctx);
        self.ctx = Some(audio_ctx);
        Ok(())
    }

    fn create_tone_source(&mut self, wave: WaveType) -> Result<WebTone, DeviceError> {
        let audio_ctx = self.context()?;
        let osc = web::OscillatorNode::new(audio_ctx).map_err(|e| js_err("OscillatorNode", e))?;
        osc.set_type(oscillator_type(wave));
        let gain = create_gain(audio_ctx, 0.0, "Tone gain")?;
        osc.connect_with_audio_node(&gain)
            .map_err(|e| js_err("connect oscillator", e))?;
        gain.connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| js_err("connect gain", e))?;
        osc.start().map_err(|e| js_err("start oscillator", e))?;
        Ok(WebTone { osc, gain })
    }

    fn retune(&mut self, tone: &WebTone, frequency_hz: u32) {
        if let Some(audio_ctx) = &self.ctx {
            _ = tone
                .osc
                .frequency()
                .set_value_at_time(frequency_hz as f32, audio_ctx.current_time());
        }
    }

    fn set_gain(&mut self, tone: &WebTone, level: f32) {
        if let Some(audio_ctx) = &self.ctx {
            _ = tone
                .gain
                .gain()
                .set_value_at_time(level, audio_ctx.current_time());
        }
    }

    fn stop_and_release(&mut self, tone: WebTone) {
        _ = tone.osc.stop();
        _ = tone.osc.disconnect();
        _ = tone.gain.disconnect();
    }

    fn close_device(&mut self) {
        if let Some(audio_ctx) = self.ctx.take() {
            _ = audio_ctx.close();
        }
    }
}
