//! Hexline - A line-oriented binary-to-hex record converter
//!
//! Usage: `hexline <mode> <input_file> <output_file> [<cache_size>]`
//!
//! Exit status: 0 success, 2 usage, 3 I/O failure (including failure to
//! print the report), 4 malformed input.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexline::cache::DEFAULT_CAPACITY;
use hexline::models::RunReport;
use hexline::{convert_file, Config, Mode};

/// Exit status when the report cannot be written to stdout
const EXIT_REPORT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "hexline")]
#[command(about = "Convert <size>:<binary> records to <size>:<HEX>, with optional line caching", long_about = None)]
struct Cli {
    #[arg(value_enum, help = "Conversion mode")]
    mode: Mode,

    #[arg(help = "File to read records from")]
    input_file: PathBuf,

    #[arg(help = "File to write converted records to")]
    output_file: PathBuf,

    #[arg(default_value_t = DEFAULT_CAPACITY, help = "Maximum number of cached lines")]
    cache_size: usize,

    #[arg(long, help = "Make decompress modes decode hex back to binary")]
    invert_decompress: bool,

    #[arg(long, help = "Print the run report as JSON")]
    json: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(self.mode, self.input_file.clone(), self.output_file.clone())
            .with_cache_size(self.cache_size)
            .with_invert_decompress(self.invert_decompress)
    }
}

/// Entry point.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `hexline=info`). The
/// timing summary or JSON report goes to stdout.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match convert_file(&config) {
        Ok(report) => match print_report(&report, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("Failed to print report: {:#}", err);
                ExitCode::from(EXIT_REPORT_FAILURE)
            }
        },
        Err(err) => {
            error!("Conversion failed: {}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn print_report(report: &RunReport, json: bool) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, report)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", report.summary())?;
    }
    stdout.flush()?;
    Ok(())
}
