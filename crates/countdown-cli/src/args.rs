use std::path::PathBuf;

use chrono::TimeDelta;
use clap::{Parser, ValueEnum};

const EXAMPLES: &str = "\
Examples:
  countdown 25s
  countdown 1m50s
  countdown 2h45m50s

Keys:
  p        pause
  c        restart
  Esc, ^C  quit";

#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Count down in the terminal and ring a bell when time is up", long_about = None)]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Duration with unit suffixes (h, m, s, ms, us, ns); may be signed
    #[arg(
        value_name = "DURATION",
        value_parser = countdown_engine::parse_duration,
        allow_hyphen_values = true
    )]
    pub duration: TimeDelta,

    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_duration_positional() {
        let cli = Cli::try_parse_from(["countdown", "1m50s"]).unwrap();
        assert_eq!(cli.duration, TimeDelta::seconds(110));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_logging_flags() {
        let cli = Cli::try_parse_from([
            "countdown",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/countdown.log",
            "25s",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/countdown.log")));
    }

    #[test]
    fn test_rejects_missing_and_extra_arguments() {
        assert!(Cli::try_parse_from(["countdown"]).is_err());
        assert!(Cli::try_parse_from(["countdown", "25s", "30s"]).is_err());
    }

    #[test]
    fn test_rejects_bad_duration() {
        let err = Cli::try_parse_from(["countdown", "25"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("missing unit"));
    }

    #[test]
    fn test_negative_duration_after_separator() {
        let cli = Cli::try_parse_from(["countdown", "--", "-5s"]).unwrap();
        assert_eq!(cli.duration, TimeDelta::seconds(-5));
    }

    #[test]
    fn test_signed_duration_without_separator() {
        let cli = Cli::try_parse_from(["countdown", "-5s"]).unwrap();
        assert_eq!(cli.duration, TimeDelta::seconds(-5));

        let cli = Cli::try_parse_from(["countdown", "-1m30s"]).unwrap();
        assert_eq!(cli.duration, TimeDelta::seconds(-90));

        let cli = Cli::try_parse_from(["countdown", "--log-level", "info", "-5s"]).unwrap();
        assert_eq!(cli.duration, TimeDelta::seconds(-5));
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_help_flags_still_win_over_duration() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["countdown", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }
        let err = Cli::try_parse_from(["countdown", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
