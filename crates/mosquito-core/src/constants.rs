// Shared tuning constants used by both web and native frontends.

// Detection geometry (pixels)
pub const DETECTION_RADIUS_PX: f32 = 300.0; // tone plays at or inside this distance
pub const CLOSE_RADIUS_PX: f32 = 150.0; // "very close" highlight on the target marker

// Output level for the continuous tone (0..1)
pub const TONE_GAIN: f32 = 0.1;

// Accepted frequency bounds for the settings surface (Hz, inclusive)
pub const MIN_ALLOWED_HZ: u32 = 50;
pub const MAX_ALLOWED_HZ: u32 = 2000;

// Defaults used when no settings record is persisted
pub const DEFAULT_MIN_FREQUENCY_HZ: u32 = 200;
pub const DEFAULT_MAX_FREQUENCY_HZ: u32 = 1000;

// Key of the persisted settings record
pub const SETTINGS_KEY: &str = "mosquito-settings";
