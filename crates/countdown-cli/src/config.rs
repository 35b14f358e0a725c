use std::path::PathBuf;

use countdown_engine::CountdownConfig;

use crate::args::{Cli, LogLevel};

/// Bell played when the countdown ends, relative to the working directory
pub const SOUND_PATH: &str = "./mp3/bell-ringing-01.mp3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

/// Everything a run needs, resolved from the command line.
///
/// Nothing is read from config files or the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub countdown: CountdownConfig,
    pub sound_path: PathBuf,
    pub log: LogConfig,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            countdown: CountdownConfig::new(cli.duration),
            sound_path: PathBuf::from(SOUND_PATH),
            log: LogConfig {
                level: cli.log_level,
                file: cli.log_file.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use clap::Parser;
    use countdown_engine::TICK;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::try_parse_from(["countdown", "--log-level", "info", "2h45m50s"]).unwrap();
        let config = Config::from_cli(&cli);

        assert_eq!(
            config.countdown.duration,
            TimeDelta::seconds(2 * 3600 + 45 * 60 + 50)
        );
        assert_eq!(config.countdown.tick, TICK);
        assert_eq!(config.sound_path, PathBuf::from(SOUND_PATH));
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.log.file, None);
    }
}
