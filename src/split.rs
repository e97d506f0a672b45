// src/split.rs
//
// Main entry point for a split run: load both inputs, validate, shuffle once,
// write every partition.

use crate::error::SplitError;
use crate::partition::{plan_partitions, PartitionWriter};
use crate::permutation::{rng_from_seed, IndexSource, Permutation};
use crate::record_store::RecordStore;
use crate::split_opt::SplitOpt;

pub use crate::partition::PartitionOutput;

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Paired records in each input
    pub records: usize,
    pub partitions: Vec<PartitionOutput>,
}

/// Split using the random generator described by `opt.seed`
pub fn split_paired(opt: &SplitOpt) -> Result<SplitSummary, SplitError> {
    let mut rng = rng_from_seed(opt.seed);
    split_paired_with_source(opt, &mut rng)
}

/// Split drawing the shuffle from `source`
///
/// All validation (input parsing, pair counts, part count) completes before
/// the first output file is created.
pub fn split_paired_with_source<S: IndexSource + ?Sized>(
    opt: &SplitOpt,
    source: &mut S,
) -> Result<SplitSummary, SplitError> {
    let records1 = RecordStore::load(&opt.reads1, opt.max_line_len)?;
    let records2 = RecordStore::load(&opt.reads2, opt.max_line_len)?;

    let naming = opt.output_naming();
    let writer = PartitionWriter::new(&records1, &records2, &naming)?;
    let n = writer.len();

    let plan = plan_partitions(n, opt.parts)?;
    log::info!(
        "Splitting {} read pairs into {} parts ({} per part, last part +{})",
        n,
        plan.num_partitions(),
        plan.base,
        plan.remainder()
    );

    let perm = Permutation::shuffled(n, source);
    let partitions = writer.write_all(&plan, &perm)?;

    for out in &partitions {
        log::info!(
            "Part {}: {} read pairs -> {}, {}",
            out.number,
            out.records,
            out.path1.display(),
            out.path2.display()
        );
    }

    Ok(SplitSummary {
        records: n,
        partitions,
    })
}
