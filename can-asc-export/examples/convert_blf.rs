//! Standalone BLF to ASC conversion example
//!
//! Usage:
//!   convert_blf <recording.blf> [output_dir]
//!
//! Example:
//!   convert_blf run1.blf traces

use can_asc_export::{export_file, ExportOptions};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: convert_blf <recording.blf> [output_dir]");
        std::process::exit(1);
    }

    let mut options = ExportOptions::new();
    if let Some(dir) = args.get(2) {
        options = options.with_output_dir(dir);
    }

    match export_file(Path::new(&args[1]), &options) {
        Ok(written) => println!("Wrote {:?}", written),
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
