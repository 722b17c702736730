//! Prints a byte-frequency histogram of a file or standard input.
//!
//! ```bash
//! byte-hist data.bin
//! byte-hist -f x -s desc data.bin
//! gzip -c data.bin | byte-hist
//! ```

use std::io;
use std::path::PathBuf;

use bytehist::ByteHistogram;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod error;
mod input;
mod report;

use error::CliError;
use input::Input;
use report::{ByteFormat, SortOrder};

/// Print a byte-frequency histogram of FILE, or of standard input
#[derive(Parser, Debug)]
#[command(name = "byte-hist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Byte column format
    #[arg(short, long, value_enum, default_value = "d")]
    format: ByteFormat,

    /// Sort rows by count instead of byte value
    #[arg(short, long, value_enum)]
    sort: Option<SortOrder>,

    /// File to read; standard input when omitted
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("byte-hist: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut input = Input::open(cli.file.as_deref())?;

    let mut histogram = ByteHistogram::new();
    input.read_into(&mut histogram)?;

    if histogram.total() == 0 {
        return Err(CliError::NoData);
    }

    let stdout = io::stdout();
    report::render(
        &mut stdout.lock(),
        &input.name(),
        &histogram,
        cli.format,
        cli.sort,
    )?;

    Ok(())
}
