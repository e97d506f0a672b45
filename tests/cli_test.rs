//! Integration tests for the ferrous-split binary
//!
//! These tests check the command-line contract: four positional arguments,
//! exit code 0 on success, non-zero with a diagnostic on stderr otherwise.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to create a test FASTQ file with N reads
fn create_test_fastq(path: &PathBuf, num_reads: usize, read_prefix: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    for i in 0..num_reads {
        writeln!(file, "@{}_{}", read_prefix, i)?;
        writeln!(file, "ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGT")?; // 40bp read
        writeln!(file, "+")?;
        writeln!(file, "IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIIII")?; // Q40 quality
    }

    Ok(())
}

fn run_split(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ferrous-split"))
        .args(args)
        .output()
        .expect("Failed to run ferrous-split")
}

fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains("_part"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_cli_success() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    let r2_path = temp_dir.path().join("R2.fq");
    let prefix = temp_dir.path().join("out");
    create_test_fastq(&r1_path, 100, "read").unwrap();
    create_test_fastq(&r2_path, 100, "read").unwrap();

    let output = run_split(&[
        r1_path.to_str().unwrap(),
        r2_path.to_str().unwrap(),
        prefix.to_str().unwrap(),
        "3",
        "--seed",
        "17",
    ]);

    assert!(
        output.status.success(),
        "Expected success. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        output_files(temp_dir.path()),
        vec![
            "out_part1_1.fastq",
            "out_part1_2.fastq",
            "out_part2_1.fastq",
            "out_part2_2.fastq",
            "out_part3_1.fastq",
            "out_part3_2.fastq",
        ]
    );

    // 100 / 3 = 33, last part takes 34
    let last = fs::read_to_string(temp_dir.path().join("out_part3_2.fastq")).unwrap();
    assert_eq!(last.lines().count(), 34 * 4);
}

#[test]
fn test_cli_seeded_runs_match() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    let r2_path = temp_dir.path().join("R2.fq");
    create_test_fastq(&r1_path, 50, "read").unwrap();
    create_test_fastq(&r2_path, 50, "read").unwrap();

    for prefix in ["a", "b"] {
        let output = run_split(&[
            r1_path.to_str().unwrap(),
            r2_path.to_str().unwrap(),
            temp_dir.path().join(prefix).to_str().unwrap(),
            "2",
            "-s",
            "8",
            "-v",
            "1",
        ]);
        assert!(output.status.success());
    }

    for part in 1..=2 {
        for mate in 1..=2 {
            let a = fs::read(temp_dir.path().join(format!("a_part{}_{}.fastq", part, mate))).unwrap();
            let b = fs::read(temp_dir.path().join(format!("b_part{}_{}.fastq", part, mate))).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_cli_zero_parts_fails() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    let r2_path = temp_dir.path().join("R2.fq");
    let prefix = temp_dir.path().join("out");
    create_test_fastq(&r1_path, 10, "read").unwrap();
    create_test_fastq(&r2_path, 10, "read").unwrap();

    let output = run_split(&[
        r1_path.to_str().unwrap(),
        r2_path.to_str().unwrap(),
        prefix.to_str().unwrap(),
        "0",
    ]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(
        stderr.contains("invalid number of parts"),
        "Expected part count error. Stderr: {}",
        stderr
    );
    assert!(output_files(temp_dir.path()).is_empty());
}

#[test]
fn test_cli_too_many_parts_fails() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    let r2_path = temp_dir.path().join("R2.fq");
    let prefix = temp_dir.path().join("out");
    create_test_fastq(&r1_path, 10, "read").unwrap();
    create_test_fastq(&r2_path, 10, "read").unwrap();

    let output = run_split(&[
        r1_path.to_str().unwrap(),
        r2_path.to_str().unwrap(),
        prefix.to_str().unwrap(),
        "11",
    ]);

    assert!(!output.status.success());
    assert!(output_files(temp_dir.path()).is_empty());
}

#[test]
fn test_cli_read_count_mismatch_fails() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    let r2_path = temp_dir.path().join("R2_truncated.fq");
    let prefix = temp_dir.path().join("out");
    create_test_fastq(&r1_path, 1000, "read").unwrap(); // R1: 1000 reads
    create_test_fastq(&r2_path, 998, "read").unwrap(); // R2: 998 reads (2 missing)

    let output = run_split(&[
        r1_path.to_str().unwrap(),
        r2_path.to_str().unwrap(),
        prefix.to_str().unwrap(),
        "4",
    ]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(
        stderr.contains("read count mismatch") && stderr.contains("R1=1000") && stderr.contains("R2=998"),
        "Expected error message about read count mismatch. Stderr: {}",
        stderr
    );
    assert!(output_files(temp_dir.path()).is_empty());
}

#[test]
fn test_cli_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let r1_path = temp_dir.path().join("R1.fq");
    create_test_fastq(&r1_path, 10, "read").unwrap();

    let output = run_split(&[
        r1_path.to_str().unwrap(),
        temp_dir.path().join("missing.fq").to_str().unwrap(),
        temp_dir.path().join("out").to_str().unwrap(),
        "2",
    ]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("missing.fq"), "Stderr: {}", stderr);
}

#[test]
fn test_cli_wrong_argument_count_fails() {
    let output = run_split(&["only_one.fq"]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
