pub mod defaults;
pub mod error; // SplitError: every way a run can fail
pub mod io; // FASTQ reading and writing
pub mod partition; // Partition planning and emission
pub mod permutation; // Fisher-Yates shuffle over record indices
pub mod record_store; // In-memory record storage for one input file
pub mod split; // Run orchestration
pub mod split_opt;

pub use error::SplitError;
pub use permutation::{IndexSource, Permutation};
pub use record_store::{FastqRecord, RecordStore};
pub use split::{split_paired, split_paired_with_source, PartitionOutput, SplitSummary};
pub use split_opt::SplitOpt;
