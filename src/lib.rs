//! # pt2gff
//!
//! Batch converter from `.pt` annotation files to GFF3.
//!
//! A `.pt` file is a sequence of three-line blocks: a `>` header line, a
//! `$` DNA sequence line and a `#` comma-separated value line whose
//! entries align with the sequence positions. For each block, pt2gff
//! emits a `##sequence-region` declaration, a gene and a CDS feature
//! spanning the full sequence, and one `region` feature per maximal run
//! of consecutive values >= 1.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use pt2gff::{run, Config};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input_dir: PathBuf::from("annotations/"),
//!     output_dir: PathBuf::from("gff/"),
//! };
//!
//! let stats = run(&config)?;
//! println!(
//!     "{} files converted, {} failed in {:?}",
//!     stats.files_converted, stats.files_failed, stats.elapsed
//! );
//! ```
//!
//! Files are converted independently: a malformed file is reported and
//! skipped without aborting the rest of the batch.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod gff;
pub mod memory;
pub mod record;

pub use cli::{ArgError, Args};
pub use config::Config;
pub use convert::{run, RunStats};
pub use error::{Pt2GffError, Result};
pub use memory::max_mem_usage_mb;
pub use record::PtRecord;
