//! Command-line arguments for the previewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use engine_logging::{LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "gridsim")]
#[command(version = "0.1")]
#[command(about = "Preview the grid effects of spreadsheet shortcut challenges")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Where to write log output
    #[arg(long, value_enum, default_value_t = LogTarget::Off, global = true)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,

    /// Log at debug level instead of info
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a challenge grid before and after its steps
    Preview {
        /// Challenge file (.json or .ron)
        path: PathBuf,

        /// Show the grid after this step instead of the last one (-1 = before any step)
        #[arg(short, long, allow_negative_numbers = true)]
        step: Option<isize>,

        /// Do not print the list of changes
        #[arg(long = "no-diff")]
        no_diff: bool,
    },
    /// Rewrite a challenge file in another format, chosen by the output extension
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
            LogTarget::Off => LogDestination::Off,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_accepts_negative_step() {
        let cli = Cli::parse_from(["gridsim", "preview", "a.json", "--step", "-1"]);
        match cli.command {
            Command::Preview { step, no_diff, .. } => {
                assert_eq!(step, Some(-1));
                assert!(!no_diff);
            }
            Command::Convert { .. } => panic!("expected preview"),
        }
        assert_eq!(cli.log_destination(), LogDestination::Off);
    }

    #[test]
    fn log_flags_map_to_destination() {
        let cli = Cli::parse_from([
            "gridsim", "--log", "both", "--log-file", "x.log", "-v", "convert", "a.json", "b.ron",
        ]);
        assert_eq!(cli.log_destination(), LogDestination::Both(PathBuf::from("x.log")));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }
}
