use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "pt2gff",
    version = env!("CARGO_PKG_VERSION"),
    about = "batch .pt-to-GFF3 annotation converter"
)]
pub struct Args {
    /// Directory scanned for `.pt` annotation files.
    ///
    /// Every file in this directory with a `.pt` extension is converted;
    /// other files are ignored.
    #[clap(
        short = 'i',
        long = "input",
        help = "Directory containing .pt files",
        value_name = "INPUT_DIR",
        required = true
    )]
    pub input: PathBuf,

    /// Directory receiving one `.gff` file per converted input.
    ///
    /// Created if it does not exist yet.
    #[clap(
        short = 'o',
        long = "output",
        help = "Directory for the generated .gff files",
        value_name = "OUTPUT_DIR",
        required = true
    )]
    pub output: PathBuf,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the input directory for validity. The path must exist and
    /// be a directory.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input.exists() {
            let err = format!("directory {:?} does not exist", self.input);
            Err(ArgError::InvalidInput(err))
        } else if !self.input.is_dir() {
            let err = format!("{:?} is not a directory", self.input);
            Err(ArgError::InvalidInput(err))
        } else {
            Ok(())
        }
    }

    /// Checks the output path for validity. If the path already exists it
    /// must be a directory; a missing path is fine, the converter creates it.
    fn check_output(&self) -> Result<(), ArgError> {
        if self.output.exists() && !self.output.is_dir() {
            let err = format!("{:?} exists and is not a directory", self.output);
            Err(ArgError::InvalidOutput(err))
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_output()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input path does not exist or is not a directory.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The output path exists but is not a directory.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}
