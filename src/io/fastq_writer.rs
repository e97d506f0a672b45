// FASTQ writer module
//
// Emits the four-line record shape. Every line, including the last one of a
// file, ends with a single `\n`; the separator line is always a bare `+`.

use std::io::{self, Write};

use crate::defaults::SEPARATOR_LINE;
use crate::record_store::FastqRecord;

pub struct FastqWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> io::Result<()> {
        self.inner.write_all(&rec.id)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&rec.seq)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(SEPARATOR_LINE)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&rec.qual)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Records written so far
    pub fn records_written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
