//! Tarpick CLI application entry point
//!
//! Lists the files in the current directory, asks for part of an archive
//! name, creates a destination folder and extracts the chosen `.tar.gz`
//! into it with the system `tar`.
//!
//! # Usage
//!
//! ```bash
//! tarpick
//! tarpick -q
//! tarpick --print-config
//! ```
//!
//! # Configuration
//!
//! Optional settings are read from `~/.config/tarpick/config.toml` (Linux),
//! `./tarpick.toml` and `TARPICK_*` environment variables.

use std::process::ExitCode;

use tarpick::{
    TarpickError,
    cli::Cli,
    config::TarpickConfig,
    extract::TarExtractor,
    session::Session,
    ui::{DialoguerInput, OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, TarpickError>;

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let work_dir = std::env::current_dir()?;
    let config = TarpickConfig::load(&work_dir)?;
    log::debug!("Effective configuration: {config:?}");

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let input = DialoguerInput::new();
    let extractor = TarExtractor::new(config.extractor.clone(), config.verbose_extract);

    Session::new(work_dir, &input, output, &extractor)
        .max_attempts(config.max_attempts)
        .quiet(cli.quiet || config.quiet)
        .run()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let output = StdoutWriter::new();
    let result = run(&cli, &output);
    if let Err(e) = &result {
        output.error(&e.to_string());
    }
    ExitCode::from(exit_status(&result))
}

/// Process exit status for a finished run: 0 on success, 1 on any error
const fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
