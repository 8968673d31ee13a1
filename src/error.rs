use thiserror::Error;

/// Error type for pt2gff operations.
#[derive(Debug, Error)]
pub enum Pt2GffError {
    /// A line carries an unexpected or unknown marker for its position.
    #[error("malformed record at line {line}: expected a '{expected}' line, found {found:?}")]
    MalformedRecord {
        line: usize,
        expected: char,
        found: String,
    },
    /// A value in the '#' line cannot be parsed as a number.
    #[error("invalid numeric value {value:?} at line {line}")]
    InvalidValue { line: usize, value: String },
    /// The value list and the sequence of a record disagree in length.
    #[error(
        "record {header:?} at line {line}: {values} values for a sequence of length {sequence}"
    )]
    LengthMismatch {
        header: String,
        line: usize,
        sequence: usize,
        values: usize,
    },
    /// The input directory does not exist or is not a directory.
    #[error("invalid input directory: {0}")]
    InvalidInput(String),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for pt2gff operations.
pub type Result<T> = std::result::Result<T, Pt2GffError>;
