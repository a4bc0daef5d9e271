// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("writing test input");
    path
}

#[allow(dead_code)]
pub fn run_bin<P: AsRef<Path>>(exe: P, args: &[&str]) -> Output {
    Command::new(exe.as_ref())
        .args(args)
        .output()
        .expect("running binary")
}

#[allow(dead_code)]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[allow(dead_code)]
pub fn fasta_with_n_records(n: usize) -> String {
    (0..n).map(|i| format!(">r{} desc\nACGT\nTT{}\n", i, i)).collect()
}

#[allow(dead_code)]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
