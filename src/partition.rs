//! Partition planning and emission
//!
//! The permuted index range `[0, n)` is cut into `k` contiguous half-open
//! ranges. The first `k - 1` partitions hold `n / k` records each and the
//! last one also takes the `n % k` remainder, so it is the only partition
//! that can be larger than the others.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::SplitError;
use crate::io::fastq_writer::FastqWriter;
use crate::permutation::Permutation;
use crate::record_store::RecordStore;

/// One output group: positions `[start, end)` of the permutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// 1-based partition number, as used in output file names
    pub number: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Validated set of partitions covering `[0, n)`
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    /// Total number of paired records
    pub n: usize,

    /// Size of every partition except the last
    pub base: usize,

    pub partitions: Vec<Partition>,
}

impl PartitionPlan {
    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// Records the last partition holds beyond `base`
    pub fn remainder(&self) -> usize {
        self.partitions.last().map_or(0, |p| p.len() - self.base)
    }

    /// Verify that all positions from 0 to n-1 are covered exactly once
    #[cfg(test)]
    fn verify_coverage(&self) -> bool {
        let mut seen = vec![false; self.n];
        for part in &self.partitions {
            for pos in part.range() {
                if pos >= self.n || seen[pos] {
                    return false;
                }
                seen[pos] = true;
            }
        }
        seen.iter().all(|&b| b)
    }
}

impl<'a> IntoIterator for &'a PartitionPlan {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cut `n` records into `parts` partitions
///
/// # Errors
/// `SplitError::InvalidPartCount` unless `1 <= parts <= n`.
pub fn plan_partitions(n: usize, parts: usize) -> Result<PartitionPlan, SplitError> {
    if parts == 0 || parts > n {
        return Err(SplitError::InvalidPartCount { parts, records: n });
    }

    let base = n / parts;
    let partitions = (0..parts)
        .map(|p| Partition {
            number: p + 1,
            start: p * base,
            end: if p == parts - 1 { n } else { (p + 1) * base },
        })
        .collect();

    Ok(PartitionPlan {
        n,
        base,
        partitions,
    })
}

/// Deterministic output file names: `<prefix>_part<N>_<mate>.<ext>`
#[derive(Debug, Clone)]
pub struct OutputNaming {
    pub prefix: PathBuf,
    pub extension: String,
}

impl OutputNaming {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: defaults::OUTPUT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Path for mate 1 or 2 of partition `number`
    pub fn path(&self, number: usize, mate: u8) -> PathBuf {
        let mut name = OsString::from(self.prefix.as_os_str());
        name.push(format!("_part{}_{}.{}", number, mate, self.extension));
        PathBuf::from(name)
    }

    pub fn paths(&self, number: usize) -> (PathBuf, PathBuf) {
        (self.path(number, 1), self.path(number, 2))
    }
}

/// Files written for one partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutput {
    pub number: usize,
    pub records: usize,
    pub path1: PathBuf,
    pub path2: PathBuf,
}

/// Writes permuted slices of a pair of record stores
pub struct PartitionWriter<'a> {
    records1: &'a RecordStore,
    records2: &'a RecordStore,
    naming: &'a OutputNaming,
}

impl<'a> PartitionWriter<'a> {
    /// # Errors
    /// `SplitError::PairMismatch` if the stores hold different record counts.
    pub fn new(
        records1: &'a RecordStore,
        records2: &'a RecordStore,
        naming: &'a OutputNaming,
    ) -> Result<Self, SplitError> {
        if records1.len() != records2.len() {
            return Err(SplitError::PairMismatch {
                r1: records1.len(),
                r2: records2.len(),
            });
        }
        Ok(Self {
            records1,
            records2,
            naming,
        })
    }

    /// Number of paired records
    pub fn len(&self) -> usize {
        self.records1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records1.is_empty()
    }

    /// Write every partition of `plan`, in order
    ///
    /// Stops at the first failure; partitions already written stay on disk.
    pub fn write_all(
        &self,
        plan: &PartitionPlan,
        perm: &Permutation,
    ) -> Result<Vec<PartitionOutput>, SplitError> {
        let n = self.len();
        let in_bounds = plan.iter().all(|p| p.start <= p.end && p.end <= n);
        if plan.n != n || perm.len() != n || !in_bounds {
            return Err(SplitError::PlanMismatch {
                records: n,
                plan: plan.n,
                permutation: perm.len(),
            });
        }

        plan.iter()
            .map(|part| self.write_partition(part, perm))
            .collect()
    }

    /// Write both files of one partition, truncating existing files
    fn write_partition(
        &self,
        part: &Partition,
        perm: &Permutation,
    ) -> Result<PartitionOutput, SplitError> {
        let (path1, path2) = self.naming.paths(part.number);
        log::debug!(
            "Partition {}: positions [{}, {}) -> {}, {}",
            part.number,
            part.start,
            part.end,
            path1.display(),
            path2.display()
        );

        let mut out1 = create_writer(&path1)?;
        let mut out2 = create_writer(&path2)?;

        for &idx in &perm.as_slice()[part.range()] {
            out1.write_record(&self.records1[idx])
                .map_err(|source| write_error(&path1, source))?;
            out2.write_record(&self.records2[idx])
                .map_err(|source| write_error(&path2, source))?;
        }

        let records = out1.records_written();
        out1.finish().map_err(|source| write_error(&path1, source))?;
        out2.finish().map_err(|source| write_error(&path2, source))?;

        Ok(PartitionOutput {
            number: part.number,
            records,
            path1,
            path2,
        })
    }
}

fn create_writer(path: &Path) -> Result<FastqWriter<BufWriter<File>>, SplitError> {
    let file = File::create(path).map_err(|source| SplitError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FastqWriter::new(BufWriter::with_capacity(
        defaults::WRITE_BUFFER_SIZE,
        file,
    )))
}

fn write_error(path: &Path, source: io::Error) -> SplitError {
    SplitError::Write {
        path: path.to_path_buf(),
        source,
    }
}
