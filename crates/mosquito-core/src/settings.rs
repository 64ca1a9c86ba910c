use crate::constants::{
    DEFAULT_MAX_FREQUENCY_HZ, DEFAULT_MIN_FREQUENCY_HZ, MAX_ALLOWED_HZ, MIN_ALLOWED_HZ,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Oscillator shape used for the tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveType {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl WaveType {
    pub const ALL: [WaveType; 4] = [
        WaveType::Sine,
        WaveType::Square,
        WaveType::Triangle,
        WaveType::Sawtooth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WaveType::Sine => "sine",
            WaveType::Square => "square",
            WaveType::Triangle => "triangle",
            WaveType::Sawtooth => "sawtooth",
        }
    }

    /// Human-facing label shown next to the waveform selector.
    pub fn label(self) -> &'static str {
        match self {
            WaveType::Sine => "Sine (Smooth)",
            WaveType::Square => "Square (Sharp)",
            WaveType::Triangle => "Triangle (Mellow)",
            WaveType::Sawtooth => "Sawtooth (Harsh)",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown waveform `{0}` (expected sine, square, triangle or sawtooth)")]
pub struct UnknownWaveType(pub String);

impl FromStr for WaveType {
    type Err = UnknownWaveType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveType::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownWaveType(s.to_string()))
    }
}

/// Rejections produced at the settings edit surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Minimum frequency must be less than maximum frequency")]
    InvertedRange { min: i64, max: i64 },
    #[error("Frequencies must be between 50Hz and 2000Hz")]
    OutOfRange { min: i64, max: i64 },
}

impl SettingsError {
    /// Short heading for toast-style notifications.
    pub fn title(&self) -> &'static str {
        match self {
            SettingsError::InvertedRange { .. } => "Invalid Settings",
            SettingsError::OutOfRange { .. } => "Invalid Range",
        }
    }
}

/// Persisted tone configuration. Field names match the stored JSON record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub min_frequency: u32,
    pub max_frequency: u32,
    pub wave_type: WaveType,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY_HZ,
            max_frequency: DEFAULT_MAX_FREQUENCY_HZ,
            wave_type: WaveType::Sine,
        }
    }
}

impl AudioSettings {
    /// Build settings from raw edit-surface values, which may be negative or
    /// far out of range.
    pub fn from_fields(
        min_hz: i64,
        max_hz: i64,
        wave_type: WaveType,
    ) -> Result<Self, SettingsError> {
        let (min, max) = (min_hz, max_hz);
        if min >= max {
            return Err(SettingsError::InvertedRange { min, max });
        }
        let out_of_range = SettingsError::OutOfRange { min, max };
        if min < i64::from(MIN_ALLOWED_HZ) || max > i64::from(MAX_ALLOWED_HZ) {
            return Err(out_of_range);
        }
        Ok(Self {
            min_frequency: u32::try_from(min).map_err(|_| out_of_range.clone())?,
            max_frequency: u32::try_from(max).map_err(|_| out_of_range)?,
            wave_type,
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        Self::from_fields(
            self.min_frequency.into(),
            self.max_frequency.into(),
            self.wave_type,
        )
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_type_parses_case_insensitively() {
        assert_eq!("Sine".parse::<WaveType>(), Ok(WaveType::Sine));
        assert_eq!(" sawtooth ".parse::<WaveType>(), Ok(WaveType::Sawtooth));
        assert!("saw".parse::<WaveType>().is_err());
    }

    #[test]
    fn inverted_range_is_reported_before_bounds() {
        let s = AudioSettings {
            min_frequency: 3000,
            max_frequency: 10,
            wave_type: WaveType::Sine,
        };
        assert_eq!(
            s.validate(),
            Err(SettingsError::InvertedRange { min: 3000, max: 10 })
        );
    }

    #[test]
    fn negative_field_is_out_of_range_not_defaulted() {
        assert_eq!(
            AudioSettings::from_fields(-40, 1000, WaveType::Sine),
            Err(SettingsError::OutOfRange { min: -40, max: 1000 })
        );
        assert_eq!(
            AudioSettings::from_fields(200, -40, WaveType::Sine),
            Err(SettingsError::InvertedRange { min: 200, max: -40 })
        );
        assert_eq!(
            AudioSettings::from_fields(1500, 2000, WaveType::Square),
            Ok(AudioSettings {
                min_frequency: 1500,
                max_frequency: 2000,
                wave_type: WaveType::Square,
            })
        );
    }
}
