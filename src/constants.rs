/// Element ids and display tuning for the web pages.
///
/// Pages are static HTML; these ids are the contract between that markup and
/// the wasm module.
// Simulation page
pub const HUMAN_ID: &str = "human"; // target marker; its box centre is the target
pub const HUMAN_PULSE_ID: &str = "human-pulse"; // shown while the pointer is very close
pub const MOSQUITO_ID: &str = "mosquito"; // marker following the pointer
pub const DISTANCE_BADGE_ID: &str = "distance-badge";
pub const FREQUENCY_BADGE_ID: &str = "frequency-badge";
pub const BUZZ_STATUS_ID: &str = "buzz-status";
pub const AUDIO_UNAVAILABLE_ID: &str = "audio-unavailable";

// Settings page
pub const SETTINGS_FORM_ID: &str = "settings-form";
pub const MIN_FREQUENCY_INPUT_ID: &str = "min-frequency";
pub const MAX_FREQUENCY_INPUT_ID: &str = "max-frequency";
pub const WAVE_TYPE_SELECT_ID: &str = "wave-type";
pub const SETTINGS_SAVE_ID: &str = "settings-save";
pub const SETTINGS_RESET_ID: &str = "settings-reset";
pub const SETTINGS_PREVIEW_ID: &str = "settings-preview";
pub const SETTINGS_TOAST_ID: &str = "settings-toast";

// Login page
pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGIN_IDENTIFIER_ID: &str = "login-identifier";
pub const LOGIN_PASSWORD_ID: &str = "login-password";
pub const LOGIN_TOAST_ID: &str = "login-toast";
pub const SIMULATION_PATH: &str = "/mosquito";

// Mosquito marker
pub const MOSQUITO_HALF_SIZE_PX: f32 = 8.0; // marker is 16px, centred on the pointer
pub const MOSQUITO_ZONE_SCALE: f32 = 1.2; // enlarged while inside the detection zone

// CSS class toggled on elements that should be hidden
pub const HIDDEN_CLASS: &str = "hidden";
