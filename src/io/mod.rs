pub mod fastq_reader; // Four-line structural FASTQ parser with bounded lines
pub mod fastq_writer;
