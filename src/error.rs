//! Errors produced by a split run
//!
//! Everything up to and including `PlanMismatch` is raised before the
//! first output file is created. `CreateOutput` and `Write` can occur after
//! earlier partitions are already on disk; those files are left in place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::io::fastq_reader::FastqError;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("cannot open input file {path}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed FASTQ in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FastqError,
    },

    #[error("paired-end read count mismatch: R1={r1}, R2={r2}")]
    PairMismatch { r1: usize, r2: usize },

    #[error("invalid number of parts: {parts} (must be between 1 and {records})")]
    InvalidPartCount { parts: usize, records: usize },

    #[error(
        "partition plan does not match the records: {records} records, plan for {plan}, permutation of {permutation}"
    )]
    PlanMismatch {
        records: usize,
        plan: usize,
        permutation: usize,
    },

    #[error("cannot create output file {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
