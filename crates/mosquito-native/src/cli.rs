//! Command-line surface: run the simulation or edit the persisted settings.

use clap::{Parser, Subcommand};
use mosquito_core::WaveType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mosquito")]
#[command(about = "Move the cursor toward the target and listen to it buzz", long_about = None)]
pub struct Args {
    /// Directory holding the settings record
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the simulation window (default)
    Run,
    /// Show or change the tone settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the settings the next session will use
    Show,
    /// Validate and store new settings; omitted fields keep their current value
    Set {
        /// Frequency when the cursor is at the edge of the zone (Hz)
        #[arg(long, value_name = "HZ")]
        min: Option<u32>,
        /// Frequency when the cursor is on the target (Hz)
        #[arg(long, value_name = "HZ")]
        max: Option<u32>,
        /// sine, square, triangle or sawtooth
        #[arg(long, value_name = "WAVE")]
        wave: Option<WaveType>,
    },
    /// Store the default settings
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::try_parse_from(["mosquito"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn set_parses_partial_fields() {
        let args =
            Args::try_parse_from(["mosquito", "settings", "set", "--max", "1500", "--wave", "square"])
                .unwrap();
        match args.command {
            Some(Command::Settings {
                action: SettingsAction::Set { min, max, wave },
            }) => {
                assert_eq!(min, None);
                assert_eq!(max, Some(1500));
                assert_eq!(wave, Some(WaveType::Square));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_wave_is_rejected() {
        assert!(Args::try_parse_from(["mosquito", "settings", "set", "--wave", "noise"]).is_err());
    }
}
