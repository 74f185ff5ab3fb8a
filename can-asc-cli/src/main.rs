//! CAN ASC Export CLI Application
//!
//! Command-line front end for the can-asc-export library. Converts one or
//! more recorded CAN log files into ASC traces, strictly sequentially; a
//! failing file is reported and does not stop the remaining files.

use anyhow::Result;
use can_asc_export::{export_file, ExportOptions, TimeWindow};
use clap::Parser;
use std::path::PathBuf;

/// CAN ASC Export - Convert recorded CAN logs into ASC traces
#[derive(Parser, Debug)]
#[command(name = "can-asc-cli")]
#[command(about = "Convert recorded CAN log files (BLF) into ASC traces", long_about = None)]
#[command(version)]
struct Args {
    /// Recorded log file(s) to convert
    #[arg(required = true, value_name = "FILE")]
    sources: Vec<PathBuf>,

    /// Directory for the generated .asc files (default: working directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only convert frames recorded at or after this time, in seconds
    #[arg(long, value_name = "SECONDS")]
    start: Option<u64>,

    /// Only convert frames recorded at or before this time, in seconds
    #[arg(long, value_name = "SECONDS")]
    end: Option<u64>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("CAN ASC Export CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using export library v{}", can_asc_export::VERSION);

    let mut options = ExportOptions::new()
        .with_window(TimeWindow::from_bounds(args.start, args.end));
    if let Some(dir) = &args.output_dir {
        options = options.with_output_dir(dir);
    }

    // One session per file, fully closed before the next begins
    let mut failed = 0usize;
    for source in &args.sources {
        match export_file(source, &options) {
            Ok(written) => {
                if !args.quiet {
                    println!("{} -> {}", source.display(), written.display());
                }
            }
            Err(e) => {
                log::error!("Failed to convert {:?}: {}", source, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, args.sources.len());
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
