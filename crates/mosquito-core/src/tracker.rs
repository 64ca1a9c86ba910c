use crate::mapper::{in_detection_zone, is_close, map_distance_to_frequency, pointer_distance};
use crate::settings::AudioSettings;
use crate::tone::{OutputDevice, ToneEngine};
use glam::Vec2;

/// Source of the target position, read fresh on every pointer event.
pub trait TargetGeometry {
    /// Centre of the target marker in pointer coordinates, or `None` while the
    /// marker is not laid out.
    fn target_center(&self) -> Option<Vec2>;
}

/// Target that never moves. Used by tests and headless drivers.
#[derive(Clone, Copy, Debug)]
pub struct FixedTarget(pub Option<Vec2>);

impl TargetGeometry for FixedTarget {
    fn target_center(&self) -> Option<Vec2> {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioStatus {
    #[default]
    Ready,
    Unavailable,
}

/// Display state published after every handled pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProximityState {
    pub pointer: Vec2,
    pub distance: u32,
    pub frequency: u32,
    pub is_playing: bool,
    pub is_close: bool,
    pub audio: AudioStatus,
}

type Observer = Box<dyn FnMut(&ProximityState)>;

pub struct ProximityTracker<G, D: OutputDevice> {
    geometry: G,
    engine: ToneEngine<D>,
    settings: AudioSettings,
    state: ProximityState,
    observers: Vec<Observer>,
    // set after a failed acquisition; cleared when the pointer leaves the zone
    audio_blocked: bool,
    torn_down: bool,
}

impl<G: TargetGeometry, D: OutputDevice> ProximityTracker<G, D> {
    pub fn new(geometry: G, device: D, settings: AudioSettings) -> Self {
        log::info!(
            "[tracker] session start {}Hz-{}Hz {}",
            settings.min_frequency,
            settings.max_frequency,
            settings.wave_type
        );
        Self {
            geometry,
            engine: ToneEngine::new(device, settings.wave_type),
            settings,
            state: ProximityState::default(),
            observers: Vec::new(),
            audio_blocked: false,
            torn_down: false,
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&ProximityState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &ProximityState {
        &self.state
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    pub fn engine(&self) -> &ToneEngine<D> {
        &self.engine
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Handle one pointer sample. Returns `false` when the event was dropped
    /// (session over or target not laid out yet).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(center) = self.geometry.target_center() else {
            return false;
        };

        let pointer = Vec2::new(x, y);
        let distance = pointer_distance(pointer, center);
        let frequency = map_distance_to_frequency(distance, &self.settings);

        if in_detection_zone(distance) {
            if !self.audio_blocked {
                match self.engine.play_at(frequency) {
                    Ok(()) => self.state.audio = AudioStatus::Ready,
                    Err(e) => {
                        log::error!("[tracker] audio unavailable: {}", e);
                        self.audio_blocked = true;
                        self.state.audio = AudioStatus::Unavailable;
                    }
                }
            }
        } else {
            self.engine.stop();
            self.audio_blocked = false;
        }

        self.state.pointer = pointer;
        self.state.distance = distance.round() as u32;
        self.state.frequency = frequency;
        self.state.is_close = is_close(distance);
        self.state.is_playing = self.engine.is_playing();
        self.publish();
        true
    }

    /// Pointer left the tracked surface.
    pub fn on_pointer_leave(&mut self) {
        if self.torn_down {
            return;
        }
        self.engine.stop();
        self.audio_blocked = false;
        self.state.is_playing = false;
        self.publish();
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.engine.stop();
        self.engine.teardown();
        self.torn_down = true;
        self.state.is_playing = false;
        self.observers.clear();
        log::info!("[tracker] session ended");
    }

    fn publish(&mut self) {
        let snapshot = self.state;
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}
