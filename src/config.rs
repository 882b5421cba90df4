use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::constants::DEFAULT_TICK_MS;

/// A falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about,
    long_about = "Stack the falling pieces and clear full rows to score.\n\n\
        CONTROLS:\n  Left/Right (h/l)  Move      Up (k)  Rotate\n  \
        Down (j)          Soft drop P       Pause/Resume\n  \
        Enter             Dismiss game over\n  Q                 Quit"
)]
pub struct Args {
    /// Milliseconds between gravity steps.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Where to keep the best score (defaults to the user data directory).
    #[arg(long, value_name = "PATH")]
    pub high_score_file: Option<PathBuf>,

    /// Keep the best score for this session only.
    #[arg(long, conflicts_with = "high_score_file")]
    pub no_save: bool,

    /// Seed for the piece sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH", default_value = "blockfall.log")]
    pub log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
