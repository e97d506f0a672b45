// src/defaults.rs

// Input Constants
pub const MAX_LINE_LENGTH: usize = 2048;

// Output Constants
pub const OUTPUT_EXTENSION: &str = "fastq";
pub const SEPARATOR_LINE: &[u8] = b"+";
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

// Other Constants
pub const VERBOSITY: i32 = 3;
