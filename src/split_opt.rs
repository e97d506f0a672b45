// src/split_opt.rs
//
// Run configuration for splitting a pair of FASTQ files

use std::path::PathBuf;

use crate::defaults;
use crate::partition::OutputNaming;

#[derive(Debug, Clone)]
pub struct SplitOpt {
    // Inputs
    pub reads1: PathBuf, // First-of-pair FASTQ
    pub reads2: PathBuf, // Second-of-pair FASTQ

    // Outputs
    pub output_prefix: PathBuf, // Files are named <prefix>_part<N>_<1|2>.<extension>
    pub extension: String,
    pub parts: usize, // Number of output partitions (1..=records)

    // Input limits
    pub max_line_len: usize, // Longest accepted line, terminator excluded

    // Shuffling
    pub seed: Option<u64>, // None = seed from OS entropy
}

impl SplitOpt {
    /// Options for the four required inputs, everything else at its default
    pub fn new(
        reads1: impl Into<PathBuf>,
        reads2: impl Into<PathBuf>,
        output_prefix: impl Into<PathBuf>,
        parts: usize,
    ) -> Self {
        Self {
            reads1: reads1.into(),
            reads2: reads2.into(),
            output_prefix: output_prefix.into(),
            extension: defaults::OUTPUT_EXTENSION.to_string(),
            parts,
            max_line_len: defaults::MAX_LINE_LENGTH,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn output_naming(&self) -> OutputNaming {
        OutputNaming::new(self.output_prefix.clone()).with_extension(self.extension.clone())
    }
}
