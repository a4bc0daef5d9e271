// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

const SUBSAMPLE: &str = env!("CARGO_BIN_EXE_subsample");

fn headers(text: &str) -> Vec<String> {
    text.lines()
        .filter(|l| l.starts_with('>'))
        .map(String::from)
        .collect()
}

#[test]
fn rate_zero_is_empty() {
    let dir = TempDir::new().unwrap();
    let fasta = utils::write_file(&dir, "in.fas", &utils::fasta_with_n_records(200));
    let out = utils::run_bin(SUBSAMPLE, &["-f", fasta.to_str().unwrap(), "-r", "0"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn rate_one_is_everything() {
    let dir = TempDir::new().unwrap();
    let fasta = utils::write_file(&dir, "in.fas", &utils::fasta_with_n_records(50));
    let out = utils::run_bin(
        SUBSAMPLE,
        &["-f", fasta.to_str().unwrap(), "--sampling_rate", "1"],
    );
    assert!(out.status.success());
    let expected: String = (0..50).map(|i| format!(">r{}\nACGTTT{}\n\n", i, i)).collect();
    assert_eq!(utils::stdout_of(&out), expected);
}

#[test]
fn out_of_range_rates_are_accepted() {
    let dir = TempDir::new().unwrap();
    let fasta = utils::write_file(&dir, "in.fas", &utils::fasta_with_n_records(20));
    let path = fasta.to_str().unwrap();
    let out = utils::run_bin(SUBSAMPLE, &["-f", path, "-r", "-2.5"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let out = utils::run_bin(SUBSAMPLE, &["-f", path, "-r", "3"]);
    assert!(out.status.success());
    assert_eq!(headers(&utils::stdout_of(&out)).len(), 20);
}

#[test]
fn fraction_and_order() {
    let dir = TempDir::new().unwrap();
    let fasta = utils::write_file(&dir, "in.fas", &utils::fasta_with_n_records(10_000));
    // Unseeded: exact output varies, only the statistics are checked.
    let out = utils::run_bin(SUBSAMPLE, &["-f", fasta.to_str().unwrap(), "-r", "0.2"]);
    assert!(out.status.success());
    let kept: Vec<usize> = headers(&utils::stdout_of(&out))
        .iter()
        .map(|h| h.trim_start_matches(">r").parse().unwrap())
        .collect();
    assert_abs_diff_eq!(kept.len() as f64 / 10_000.0, 0.2, epsilon = 0.03);
    assert!(kept.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn seed_makes_output_reproducible() {
    let dir = TempDir::new().unwrap();
    let fasta = utils::write_file(&dir, "in.fas", &utils::fasta_with_n_records(300));
    let args = ["-f", fasta.to_str().unwrap(), "-r", "0.5", "-s", "1234"];
    let first = utils::run_bin(SUBSAMPLE, &args);
    let second = utils::run_bin(SUBSAMPLE, &args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn nonexistent_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.fas");
    let out = utils::run_bin(SUBSAMPLE, &["-f", missing.to_str().unwrap(), "-r", "0.5"]);
    assert!(!out.status.success());
    assert!(utils::stderr_of(&out).contains("NotFound"));
}
