use std::path::Path;

use anyhow::{Context, Result};
use ca_cert_json::{convert, INPUT_PATH, OUTPUT_PATH};
use clap::{ArgAction, Parser};
use simplelog::{Config, LevelFilter, SimpleLogger};

/// Wrap `./ca-cert` into a `{"cert": ...}` JSON document at `./ca-cert.json`
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = SimpleLogger::init(level, Config::default());

    convert(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
        .context("Failed to convert certificate to JSON!")?;

    Ok(())
}
