//! Logging flags shared by every subcommand.

use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
///
/// Warnings and errors are logged by default; each `-v` raises the level
/// one step, and `-q` turns logging off.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more; repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(short = 't', long = "ts")]
    pub timestamps: bool,
}

impl LogArgs {
    /// The level filter selected by the flags.
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        let verbosity = match self.level_filter() {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };
        let timestamp = if self.timestamps {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .verbosity(verbosity)
            .timestamp(timestamp)
            .init()
    }
}
