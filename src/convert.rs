use crate::config::Config;
use crate::error::{Pt2GffError, Result};
use crate::gff;
use crate::memory::max_mem_usage_mb;
use crate::record::parse_records;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Extension of the annotation files picked up from the input directory.
const INPUT_EXTENSION: &str = "pt";
/// Extension of the generated output files.
const OUTPUT_EXTENSION: &str = "gff";

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Number of files converted successfully.
    pub files_converted: usize,
    /// Number of files that failed and were skipped.
    pub files_failed: usize,
    /// Total records emitted across all converted files.
    pub records: usize,
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
}

/// Runs a conversion with the provided configuration.
///
/// Every `.pt` file in the input directory is parsed and rewritten as a
/// `.gff` file in the output directory, one output per input. Files are
/// processed one at a time in sorted path order, so repeated runs over
/// the same inputs produce byte-identical outputs.
///
/// A file that fails to parse or write is logged and counted in
/// `files_failed`; the remaining files still run. An empty input
/// directory is not an error.
///
/// # Errors
///
/// Returns an error only for whole-run failures: an unreadable input
/// directory or an output directory that cannot be created.
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    std::fs::create_dir_all(&config.output_dir)?;
    let inputs = discover_inputs(&config.input_dir)?;
    if inputs.is_empty() {
        log::info!("no .{} files found in {:?}", INPUT_EXTENSION, config.input_dir);
    }

    let mut files_converted = 0;
    let mut files_failed = 0;
    let mut records = 0;

    for input in &inputs {
        match process_file(input, &config.output_dir) {
            Ok(count) => {
                log::info!("converted {:?} ({} records)", input, count);
                files_converted += 1;
                records += count;
            }
            Err(err) => {
                log::error!("failed to convert {:?}: {}", input, err);
                files_failed += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    let mem_delta = (max_mem_usage_mb() - start_mem).max(0.0);

    Ok(RunStats {
        files_converted,
        files_failed,
        records,
        elapsed,
        mem_delta_mb: mem_delta,
    })
}

/// Collects the `.pt` files of the input directory, sorted by path.
fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Pt2GffError::InvalidInput(format!(
            "{:?} is not a directory",
            dir
        )));
    }

    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
            .unwrap_or(false);
        if path.is_file() && is_pt {
            inputs.push(path);
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Converts a single `.pt` file, returning the number of records emitted.
fn process_file(input: &Path, output_dir: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(input)?;
    let records = parse_records(&text)?;

    let output = output_path(input, output_dir);
    let file = File::create(&output)?;
    let mut writer = BufWriter::new(file);
    gff::render(&records, &mut writer)?;
    writer.flush()?;

    Ok(records.len())
}

/// Derives the output path for an input file: `<output_dir>/<stem>.gff`.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| input.as_os_str().to_os_string());
    let mut name = stem;
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}
