// FASTQ reader module
//
// Structural four-line parser used to load whole input files into memory:
// - identifier line (only the first whitespace-delimited token is kept)
// - sequence line
// - separator line (content discarded)
// - quality line
//
// Line terminators (`\n` or `\r\n`) are stripped on read. Every line is read
// through a bounded `Take`, so an over-long line is reported instead of being
// buffered in full or silently truncated.

use std::io::{self, BufRead, Read};
use thiserror::Error;

use crate::defaults;
use crate::record_store::FastqRecord;

/// Errors raised while parsing a FASTQ stream
#[derive(Error, Debug)]
pub enum FastqError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("record {record} is truncated: expected 4 lines, found {lines}")]
    TruncatedRecord { record: usize, lines: usize },

    #[error("line {line} exceeds the maximum line length of {max} bytes")]
    LineTooLong { line: usize, max: usize },

    #[error("line {line} has no identifier")]
    EmptyIdentifier { line: usize },
}

/// FASTQ reader over any buffered source
pub struct FastqReader<R: BufRead> {
    inner: R,
    max_line_len: usize,
    /// Lines consumed so far (1-based number of the last line read)
    line: usize,
    /// Records returned so far
    records: usize,
}

impl<R: BufRead> FastqReader<R> {
    /// Wrap a buffered reader using the default line length limit
    pub fn new(inner: R) -> Self {
        Self::with_max_line_len(inner, defaults::MAX_LINE_LENGTH)
    }

    pub fn with_max_line_len(inner: R, max_line_len: usize) -> Self {
        Self {
            inner,
            max_line_len,
            line: 0,
            records: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the next record
    ///
    /// # Returns
    /// * `Ok(Some(record))` for each complete four-line record
    /// * `Ok(None)` at a clean end of input
    /// * `Err(FastqError::TruncatedRecord)` if the input ends inside a record
    pub fn next_record(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        let header_line = self.line + 1;
        let header = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let id = first_token(&header)
            .ok_or(FastqError::EmptyIdentifier { line: header_line })?
            .to_vec();

        let record = self.records + 1;
        let seq = self
            .read_line()?
            .ok_or(FastqError::TruncatedRecord { record, lines: 1 })?;
        self.read_line()?
            .ok_or(FastqError::TruncatedRecord { record, lines: 2 })?;
        let qual = self
            .read_line()?
            .ok_or(FastqError::TruncatedRecord { record, lines: 3 })?;

        self.records = record;
        Ok(Some(FastqRecord::new(id, seq, qual)))
    }

    /// Read one line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, FastqError> {
        let mut buf = Vec::new();

        // Room for the longest allowed content plus "\r\n"; anything that
        // fills the window without a terminator is over the limit.
        let limit = (self.max_line_len as u64).saturating_add(2);
        let n = (&mut self.inner).take(limit).read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.len() > self.max_line_len {
            return Err(FastqError::LineTooLong {
                line: self.line,
                max: self.max_line_len,
            });
        }

        Ok(Some(buf))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord, FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// First whitespace-delimited token of a header line
fn first_token(line: &[u8]) -> Option<&[u8]> {
    line.split(|b| b.is_ascii_whitespace())
        .find(|token| !token.is_empty())
}
