//! Branch trace reader.
//!
//! A trace holds one resolved conditional branch per line: a hexadecimal address (with or
//! without a `0x` prefix) and an outcome digit, separated by whitespace:
//!
//! ```text
//! 0x40b5f4 1
//! 40b600 0
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Every other line must parse; errors
//! carry the 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{BranchRecord, TraceError};

/// Parses a single trace line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, reported in errors.
/// * `line` - The raw line, with or without its trailing newline.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`], [`TraceError::InvalidPc`] or
/// [`TraceError::InvalidOutcome`] tagged with `line_no`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<BranchRecord>, TraceError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let (Some(pc_field), Some(outcome_field), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(TraceError::Malformed {
            line: line_no,
            content: trimmed.to_string(),
        });
    };

    let digits = pc_field
        .strip_prefix("0x")
        .or_else(|| pc_field.strip_prefix("0X"))
        .unwrap_or(pc_field);
    let pc = u32::from_str_radix(digits, 16).map_err(|_| TraceError::InvalidPc {
        line: line_no,
        pc: pc_field.to_string(),
    })?;

    let taken = match outcome_field {
        "1" => true,
        "0" => false,
        other => {
            return Err(TraceError::InvalidOutcome {
                line: line_no,
                outcome: other.to_string(),
            });
        }
    };

    Ok(Some(BranchRecord::new(pc, taken)))
}

/// Streaming reader yielding one [`BranchRecord`] per trace line.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<BranchRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    match parse_line(self.line_no, &self.buf) {
                        Ok(Some(record)) => return Some(Ok(record)),
                        Ok(None) => {}
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
