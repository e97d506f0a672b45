// src/record_store.rs
//
// In-memory record storage for one input file. A store is filled once, in
// file order, and is read-only afterwards: indices are stable from load to
// write.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;
use std::path::Path;

use crate::error::SplitError;
use crate::io::fastq_reader::{FastqError, FastqReader};

/// One FASTQ record. Fields are stored without line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// First whitespace-delimited token of the header line, `@` included
    pub id: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    pub fn new(id: Vec<u8>, seq: Vec<u8>, qual: Vec<u8>) -> Self {
        Self { id, seq, qual }
    }

    /// Identifier as text, for logging and diagnostics
    pub fn id_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.id)
    }
}

/// Ordered, index-addressable collection of records from one input
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<FastqRecord>,
}

impl RecordStore {
    /// Load every record of a FASTQ file
    ///
    /// # Errors
    /// * `SplitError::OpenInput` if the file cannot be opened
    /// * `SplitError::Parse` on I/O failure, a truncated trailing record,
    ///   an empty identifier line or a line longer than `max_line_len`
    pub fn load(path: &Path, max_line_len: usize) -> Result<Self, SplitError> {
        let file = File::open(path).map_err(|source| SplitError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(BufReader::new(file), max_line_len).map_err(|source| {
            SplitError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Ingest records from any buffered source until end of input
    pub fn from_reader<R: BufRead>(reader: R, max_line_len: usize) -> Result<Self, FastqError> {
        let mut reader = FastqReader::with_max_line_len(reader, max_line_len);
        let mut store = Self::default();
        while let Some(record) = reader.next_record()? {
            store.records.push(record);
        }
        log::trace!(
            "Ingested {} records ({} lines)",
            store.len(),
            reader.lines_read()
        );
        if let (Some(first), Some(last)) = (store.records.first(), store.records.last()) {
            log::trace!("First record {}, last record {}", first.id_str(), last.id_str());
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FastqRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FastqRecord> {
        self.records.iter()
    }
}

impl From<Vec<FastqRecord>> for RecordStore {
    fn from(records: Vec<FastqRecord>) -> Self {
        Self { records }
    }
}

impl Index<usize> for RecordStore {
    type Output = FastqRecord;

    fn index(&self, index: usize) -> &FastqRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a FastqRecord;
    type IntoIter = std::slice::Iter<'a, FastqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
