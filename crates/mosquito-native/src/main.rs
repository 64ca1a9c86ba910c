use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use glam::Vec2;
use mosquito_core::{
    AudioSettings, AudioStatus, ProximityState, ProximityTracker, SettingsStore, StoreError,
    TargetGeometry,
};
use winit::{
    dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod cli;
mod device;
mod store;
mod synth;

use cli::{Args, Command, SettingsAction};
use device::CpalDevice;
use store::FileBackend;

/// The window centre, refreshed on resize.
#[derive(Clone)]
struct WindowCenter(Rc<Cell<Option<Vec2>>>);

impl TargetGeometry for WindowCenter {
    fn target_center(&self) -> Option<Vec2> {
        self.0.get()
    }
}

// The zone radius is in logical pixels, matching CSS pixels in the browser.
fn size_center(size: PhysicalSize<u32>, scale_factor: f64) -> Option<Vec2> {
    let size: LogicalSize<f32> = size.to_logical(scale_factor);
    (size.width > 0.0 && size.height > 0.0).then(|| Vec2::new(size.width / 2.0, size.height / 2.0))
}

fn logical_pointer(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let position: LogicalPosition<f32> = position.to_logical(scale_factor);
    Vec2::new(position.x, position.y)
}

fn window_title(state: &ProximityState) -> String {
    let buzz = match (state.audio, state.is_playing) {
        (AudioStatus::Unavailable, _) => "Audio unavailable",
        (_, true) => "Buzzing Active",
        (_, false) => "No Buzz",
    };
    format!(
        "Mosquito Simulation • Distance: {}px • Frequency: {} Hz • {}",
        state.distance, state.frequency, buzz
    )
}

fn run(settings: AudioSettings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("Mosquito Simulation")
            .build(&event_loop)?,
    );

    let center = WindowCenter(Rc::new(Cell::new(size_center(
        window.inner_size(),
        window.scale_factor(),
    ))));
    let mut tracker = ProximityTracker::new(center.clone(), CpalDevice::new(), settings);
    {
        let window = Rc::clone(&window);
        tracker.subscribe(move |state| window.set_title(&window_title(state)));
    }

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, .. } = event {
            match event {
                WindowEvent::Resized(size) => {
                    center.0.set(size_center(size, window.scale_factor()));
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    center.0.set(size_center(window.inner_size(), scale_factor));
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let pointer = logical_pointer(position, window.scale_factor());
                    tracker.on_pointer_move(pointer.x, pointer.y);
                }
                WindowEvent::CursorLeft { .. } => tracker.on_pointer_leave(),
                WindowEvent::CloseRequested => {
                    tracker.teardown();
                    elwt.exit();
                }
                _ => {}
            }
        }
    })?;
    Ok(())
}

fn edit_settings(
    store: &mut SettingsStore<FileBackend>,
    action: SettingsAction,
) -> anyhow::Result<ExitCode> {
    let next = match action {
        SettingsAction::Show => {
            let s = store.load_or_default();
            println!(
                "{}Hz - {}Hz, waveform: {} ({})",
                s.min_frequency,
                s.max_frequency,
                s.wave_type.label(),
                store.backend().dir().display()
            );
            return Ok(ExitCode::SUCCESS);
        }
        SettingsAction::Set { min, max, wave } => {
            let current = store.load_or_default();
            AudioSettings {
                min_frequency: min.unwrap_or(current.min_frequency),
                max_frequency: max.unwrap_or(current.max_frequency),
                wave_type: wave.unwrap_or(current.wave_type),
            }
        }
        SettingsAction::Reset => store.reset(),
    };

    match store.save(&next) {
        Ok(()) => {
            println!(
                "Settings saved: {}Hz - {}Hz, waveform: {}",
                next.min_frequency, next.max_frequency, next.wave_type
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(StoreError::Invalid(e)) => {
            eprintln!("{}: {}", e.title(), e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let dir = args.config_dir.unwrap_or_else(store::default_config_dir);
    let mut store = SettingsStore::new(FileBackend::new(dir));

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            // Read once; changes made with `settings set` apply to the next run.
            run(store.load_or_default())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Settings { action } => edit_settings(&mut store, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_in_logical_pixels() {
        let size = PhysicalSize::new(1600, 1200);
        assert_eq!(size_center(size, 1.0), Some(Vec2::new(800.0, 600.0)));
        assert_eq!(size_center(size, 2.0), Some(Vec2::new(400.0, 300.0)));
        assert_eq!(size_center(PhysicalSize::new(0, 600), 2.0), None);
    }

    #[test]
    fn pointer_is_scaled_so_radius_matches_css_pixels() {
        let center = size_center(PhysicalSize::new(1600, 1200), 2.0).unwrap_or_default();
        // 600 physical px right of centre on a 2x display is 300 logical px
        let pointer = logical_pointer(PhysicalPosition::new(1400.0, 600.0), 2.0);
        assert_eq!(mosquito_core::pointer_distance(pointer, center), 300.0);
        assert!(mosquito_core::in_detection_zone(
            mosquito_core::pointer_distance(pointer, center)
        ));
    }
}
