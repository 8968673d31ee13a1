use crate::cli::Args;
use std::path::PathBuf;

/// Normalized configuration for a conversion run.
///
/// The converter only depends on this struct, not on any particular front
/// end; the CLI builds one with [`Config::from_args`], tests build one
/// directly.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory scanned for `.pt` files.
    pub input_dir: PathBuf,
    /// Directory the `.gff` files are written to.
    pub output_dir: PathBuf,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_dir: args.input.clone(),
            output_dir: args.output.clone(),
        }
    }
}
