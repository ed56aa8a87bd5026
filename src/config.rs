//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::Settings;
use crate::session::DEFAULT_TIME_LIMIT_SECS;

#[derive(Parser, Debug)]
#[command(version, about = "Take a timed multiple-choice quiz in the terminal", long_about = None)]
pub struct Args {
    /// Quiz time limit in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_SECS, value_parser = clap::value_parser!(u32).range(1..))]
    pub time_limit: u32,

    /// Simulated sign-in delay in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub auth_latency_ms: u64,

    /// File that receives the application log
    #[arg(long, default_value = "quizmaster.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the last result as JSON after quitting from the results screen
    #[arg(long)]
    pub print_result: bool,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings: Settings,
    pub log_file: PathBuf,
    pub log_level: String,
    pub print_result: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            settings: Settings {
                time_limit_secs: args.time_limit,
                auth_latency: Duration::from_millis(args.auth_latency_ms),
                ..Settings::default()
            },
            log_file: args.log_file,
            log_level: args.log_level,
            print_result: args.print_result,
        }
    }
}
