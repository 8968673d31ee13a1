use crate::error::{Pt2GffError, Result};

/// One parsed block from a `.pt` file: a `>` header line, a `$` sequence
/// line and a `#` comma-separated value line, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct PtRecord {
    pub header: String,
    pub sequence: String,
    pub values: Vec<f64>,
}

/// Markers a `.pt` line can start with.
const HEADER_MARKER: char = '>';
const SEQUENCE_MARKER: char = '$';
const VALUES_MARKER: char = '#';

/// Parses the full text of a `.pt` file into records.
///
/// Lines are classified by their leading marker rather than by position:
/// a record is assembled once a `>`, `$` and `#` line have been seen in
/// that order. Blank lines are skipped. A marker out of its expected
/// position fails the whole file; an incomplete record at end of input is
/// dropped with a warning.
///
/// # Errors
///
/// Returns `MalformedRecord` for an out-of-order or unknown marker,
/// `InvalidValue` for a value that does not parse as a number, and
/// `LengthMismatch` when a record's value count differs from its
/// sequence length.
pub fn parse_records(text: &str) -> Result<Vec<PtRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence: Option<String> = None;
    let mut header_line = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let expected = match (&header, &sequence) {
            (None, _) => HEADER_MARKER,
            (Some(_), None) => SEQUENCE_MARKER,
            (Some(_), Some(_)) => VALUES_MARKER,
        };

        let marker = line.chars().next().unwrap_or_default();
        if marker != expected {
            return Err(Pt2GffError::MalformedRecord {
                line: lineno,
                expected,
                found: line.chars().take(16).collect(),
            });
        }

        let rest = line[marker.len_utf8()..].trim();
        match marker {
            HEADER_MARKER => {
                header = Some(rest.to_string());
                header_line = lineno;
            }
            SEQUENCE_MARKER => sequence = Some(rest.to_string()),
            _ => {
                let values = parse_values(rest, lineno)?;
                let record = PtRecord {
                    header: header.take().unwrap_or_default(),
                    sequence: sequence.take().unwrap_or_default(),
                    values,
                };
                if record.values.len() != record.sequence.len() {
                    return Err(Pt2GffError::LengthMismatch {
                        header: record.header,
                        line: header_line,
                        sequence: record.sequence.len(),
                        values: record.values.len(),
                    });
                }
                records.push(record);
            }
        }
    }

    if let Some(header) = header {
        log::warn!("dropping incomplete trailing record {:?}", header);
    }

    Ok(records)
}

/// Parses the comma-separated payload of a `#` line.
fn parse_values(rest: &str, lineno: usize) -> Result<Vec<f64>> {
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    rest.split(',')
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| Pt2GffError::InvalidValue {
                    line: lineno,
                    value: raw.trim().to_string(),
                })
        })
        .collect()
}
