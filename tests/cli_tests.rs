//! End-to-end tests for the standalone binaries and the multi-command CLI.
//!
//! Each test writes its input into a temporary directory, runs the binary,
//! and checks stdout, stderr and the exit code.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

fn fasta(records: &[(&str, usize)]) -> String {
    records
        .iter()
        .map(|(name, len)| format!(">{name}\n{}\n", "A".repeat(*len)))
        .collect()
}

fn record_names(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .filter_map(|l| l.strip_prefix('>'))
        .map(str::to_string)
        .collect()
}

const FASTP_REPORT: &str = r#"{
  "summary": {
    "before_filtering": {"total_reads": 1000},
    "after_filtering": {"total_reads": 900, "q30_rate": 0.955, "gc_content": 0.50}
  }
}"#;

#[test]
fn test_extract_qc_stats() {
    let dir = TempDir::new().unwrap();
    let report = write(&dir, "fastp.json", FASTP_REPORT);

    Command::cargo_bin("extract-qc-stats")
        .unwrap()
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reads before filtering: 1000"))
        .stdout(predicate::str::contains("Reads after filtering: 900"))
        .stdout(predicate::str::contains("Q30 rate (after): 95.50%"))
        .stdout(predicate::str::contains("GC content: 50.00%"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_extract_qc_stats_missing_file() {
    Command::cargo_bin("extract-qc-stats")
        .unwrap()
        .arg("nonexistent.json")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: File not found: nonexistent.json"));
}

#[test]
fn test_extract_qc_stats_missing_key() {
    let dir = TempDir::new().unwrap();
    let report = write(&dir, "fastp.json", &FASTP_REPORT.replace("\"gc_content\"", "\"gc\""));

    Command::cargo_bin("extract-qc-stats")
        .unwrap()
        .arg(&report)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing key in JSON: 'gc_content'"));
}

#[test]
fn test_extract_qc_stats_malformed() {
    let dir = TempDir::new().unwrap();
    let report = write(&dir, "fastp.json", "{\"summary\": ");

    Command::cargo_bin("extract-qc-stats")
        .unwrap()
        .arg(&report)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not parse QC JSON"));
}

#[test]
fn test_filter_contigs() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "input.fasta",
        &fasta(&[("seq1", 300), ("seq2", 100), ("seq3", 250)]),
    );
    let output = dir.path().join("output.fasta");

    Command::cargo_bin("filter-contigs")
        .unwrap()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["--min_length", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Kept 2, Removed 1 contigs (<200bp)",
        ));

    assert_eq!(record_names(&output), ["seq1", "seq3"]);
}

#[test]
fn test_filter_contigs_default_threshold_and_idempotence() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "input.fasta",
        &fasta(&[("a", 199), ("b", 200), ("c", 5000)]),
    );
    let first = dir.path().join("first.fasta");
    let second = dir.path().join("second.fasta");

    Command::cargo_bin("filter-contigs")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&first)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept 2, Removed 1"));

    Command::cargo_bin("filter-contigs")
        .unwrap()
        .arg("-i")
        .arg(&first)
        .arg("-o")
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept 2, Removed 0"));

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_filter_contigs_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "empty.fasta", "");
    let output = dir.path().join("out.fasta");

    Command::cargo_bin("filter-contigs")
        .unwrap()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept 0, Removed 0"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_filter_contigs_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.fasta");

    Command::cargo_bin("filter-contigs")
        .unwrap()
        .arg("-i")
        .arg(dir.path().join("missing.fasta"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    assert!(!output.exists());
}

#[test]
fn test_filter_contigs_json() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "input.fasta", &fasta(&[("a", 500), ("b", 20), ("c", 10)]));
    let output = dir.path().join("out.fasta");

    let result = Command::cargo_bin("filter-contigs")
        .unwrap()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(result.status.success());

    let value: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(value["kept"], 1);
    assert_eq!(value["removed"], 2);
    assert_eq!(value["total"], 3);
    assert_eq!(value["min_length"], 200);
}

#[test]
fn test_filter_contigs_requires_paths() {
    Command::cargo_bin("filter-contigs")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_filter_hq_bins() {
    let dir = TempDir::new().unwrap();
    let report = write(
        &dir,
        "quality_report.tsv",
        "Name\tCompleteness\tContamination\nBin1\t95.0\t2.0\nBin2\t80.0\t1.0\nBin3\t99.0\t10.0\n",
    );

    Command::cargo_bin("filter-hq-bins")
        .unwrap()
        .arg(&report)
        .args(["--completeness", "90", "--contamination", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High-Quality Bins: 1/3"))
        .stdout(predicate::str::contains("Bin1"))
        .stdout(predicate::str::contains("95.0"))
        .stdout(predicate::str::contains("Bin2").not())
        .stdout(predicate::str::contains("Bin3").not());
}

#[test]
fn test_filter_hq_bins_json() {
    let dir = TempDir::new().unwrap();
    let report = write(
        &dir,
        "quality_report.tsv",
        "Name\tCompleteness\tContamination\nBin1\t95.0\t2.0\nBin2\t92.0\t4.0\n",
    );

    let output = Command::cargo_bin("filter-hq-bins")
        .unwrap()
        .arg(&report)
        .args(["--format", "json", "--completeness", "93"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["selected"].as_array().unwrap().len(), 1);
    assert_eq!(value["selected"][0]["name"], "Bin1");
}

#[test]
fn test_filter_hq_bins_missing_file() {
    Command::cargo_bin("filter-hq-bins")
        .unwrap()
        .arg("no_such_report.tsv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: QC file not found: no_such_report.tsv",
        ));
}

#[test]
fn test_filter_hq_bins_missing_column() {
    let dir = TempDir::new().unwrap();
    let report = write(&dir, "report.tsv", "Name\tCompleteness\nBin1\t95.0\n");

    Command::cargo_bin("filter-hq-bins")
        .unwrap()
        .arg(&report)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing column 'Contamination'"));
}

#[test]
fn test_read_config() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "test_config.yaml",
        "
pipeline:
  threads: 16
  resume: true
tools:
  spades_mode: \"meta\"
",
    );

    Command::cargo_bin("read-config")
        .unwrap()
        .arg(&config)
        .assert()
        .success()
        .stdout("PIPELINE_THREADS=16\nPIPELINE_RESUME=true\nTOOLS_SPADES_MODE=\"meta\"\n");
}

#[test]
fn test_read_config_missing_file() {
    Command::cargo_bin("read-config")
        .unwrap()
        .arg("missing.yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Config file not found: missing.yaml",
        ));
}

#[test]
fn test_read_config_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.yaml", "pipeline: [threads\n");

    Command::cargo_bin("read-config")
        .unwrap()
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not parse YAML file"));
}

#[test]
fn test_read_config_merge_keys() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.yaml",
        "defaults: &d\n  threads: 8\nassembly:\n  <<: *d\n  mode: meta\n",
    );

    Command::cargo_bin("read-config")
        .unwrap()
        .arg(&config)
        .assert()
        .success()
        .stdout("DEFAULTS_THREADS=8\nASSEMBLY_THREADS=8\nASSEMBLY_MODE=\"meta\"\n");
}

#[test]
fn test_read_config_not_utf8() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("latin1.yaml");
    std::fs::write(&config, b"sample: caf\xe9\n").unwrap();

    Command::cargo_bin("read-config")
        .unwrap()
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Could not parse"));
}

#[test]
fn test_read_config_non_mapping_root() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "list.yaml", "- a\n- b\n");

    Command::cargo_bin("read-config")
        .unwrap()
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An unexpected error occurred"));
}

#[test]
fn test_multi_command_binary() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.yaml", "binning:\n  min_contig: 1500\n");

    Command::cargo_bin("metagen-utils")
        .unwrap()
        .arg("read-config")
        .arg(&config)
        .args(["--separator", "__"])
        .assert()
        .success()
        .stdout("BINNING__MIN_CONTIG=1500\n");

    let report = write(&dir, "fastp.json", FASTP_REPORT);
    Command::cargo_bin("metagen-utils")
        .unwrap()
        .args(["--format", "json", "qc-stats"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reads_after\": 900"));
}
