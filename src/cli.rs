//! Command-line interface definitions and parsing
//!
//! Running `tarpick` with no arguments starts the interactive session in the
//! current directory. The flags only tune output and diagnostics.
//!
//! ```bash
//! tarpick                 # interactive session
//! tarpick -q              # no listing or confirmation lines
//! tarpick -vv             # debug logging
//! tarpick --print-config  # show the effective configuration
//! ```

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tarpick")]
#[command(about = "Pick a tar.gz archive by name and extract it into a new folder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Suppress informational output (listing and confirmation)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective configuration and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter implied by the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
