//! # pt2gff
//!
//! Batch converter from `.pt` annotation files to GFF3.
//!
//! ## Features
//!
//! - Converts every `.pt` file of a directory in one run
//! - Emits gene, CDS and threshold-region features per record
//! - Tagged-line parsing with per-line error reporting
//! - Per-file failure isolation: one bad file never aborts the batch
//!
//! ## Usage
//!
//! ```bash
//! pt2gff -i <INPUT_DIR> -o <OUTPUT_DIR>
//!
//! Required arguments:
//!   -i, --input <INPUT_DIR>    Directory containing .pt files
//!   -o, --output <OUTPUT_DIR>  Directory for the generated .gff files
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```
//!
//! ## Examples
//!
//! ```bash
//! pt2gff -i annotations/ -o gff/
//! ```
use clap::Parser;
use colored::Colorize;
use log::Level;
use pt2gff::{run, Args, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(Level::Info).unwrap();

    let args = Args::parse();
    args.check()?;
    log::info!("{:?}", args);

    let config = Config::from_args(&args);
    let stats = run(&config)?;
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    let summary = format!(
        "{} files converted ({} records), {} failed",
        stats.files_converted, stats.records, stats.files_failed
    );
    if stats.files_failed > 0 {
        eprintln!("{}", summary.red());
        std::process::exit(1);
    }
    println!("{}", summary.green());

    Ok(())
}
