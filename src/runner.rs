// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::{stdout, BufReader, BufWriter, Write},
};

use log::info;

use clap::Parser;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::compare::{compare_overlap, UpdateReport};
use crate::errors::AlnUtilsError;
use crate::extract::extract;
use crate::seq::fasta::read_fasta_map;
use crate::subsample::subsample;

/// Extract a record from a FastA file by id
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct ExtractCli {
    /// FastA file
    #[arg(short, long)]
    pub fasta: String,

    /// Record id (header up to the first whitespace)
    #[arg(short, long)]
    pub id: String,
}

/// Randomly subsample the records of a FastA file
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct SubsampleCli {
    /// FastA file
    #[arg(short, long)]
    pub fasta: String,

    /// Probability of keeping each record (not range-checked)
    #[arg(short = 'r', long = "sampling_rate", allow_negative_numbers = true)]
    pub sampling_rate: f64,

    /// Seed for reproducible sampling (default: seeded from the OS)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Show updated sequences side by side from two alignments
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct CompareCli {
    /// First alignment (FastA)
    #[arg(short, long)]
    pub bealign: String,

    /// Second alignment (FastA)
    #[arg(short, long)]
    pub cawlign: String,

    /// FastA diff report (JSON, with an "updated_sequences" list)
    #[arg(short, long)]
    pub diff: String,
}

pub fn run_extract() -> Result<(), AlnUtilsError> {
    env_logger::init();
    info!("Starting log");
    run_extract_with(ExtractCli::parse())
}

pub fn run_extract_with(cli: ExtractCli) -> Result<(), AlnUtilsError> {
    let reader = BufReader::new(File::open(&cli.fasta)?);
    let mut out = BufWriter::new(stdout().lock());
    let found = extract(reader, &cli.id, &mut out)?;
    out.flush()?;
    if !found {
        // Not an error: no output, exit status 0.
        info!("'{}' not found in {}", cli.id, cli.fasta);
    }
    Ok(())
}

pub fn run_subsample() -> Result<(), AlnUtilsError> {
    env_logger::init();
    info!("Starting log");
    run_subsample_with(SubsampleCli::parse())
}

pub fn run_subsample_with(cli: SubsampleCli) -> Result<(), AlnUtilsError> {
    let reader = BufReader::new(File::open(&cli.fasta)?);
    let mut rng = match cli.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    let mut out = BufWriter::new(stdout().lock());
    let stats = subsample(reader, cli.sampling_rate, &mut rng, &mut out)?;
    out.flush()?;
    info!(
        "kept {} of {} records (rate {})",
        stats.kept, stats.seen, cli.sampling_rate
    );
    Ok(())
}

pub fn run_compare() -> Result<(), AlnUtilsError> {
    env_logger::init();
    info!("Starting log");
    run_compare_with(CompareCli::parse())
}

pub fn run_compare_with(cli: CompareCli) -> Result<(), AlnUtilsError> {
    let first = read_fasta_map(&cli.bealign)?;
    let second = read_fasta_map(&cli.cawlign)?;
    let report = UpdateReport::from_file(&cli.diff)?;
    info!(
        "{} updated sequences; {} and {} ids loaded",
        report.updated_sequences.len(),
        first.len(),
        second.len()
    );
    let mut out = BufWriter::new(stdout().lock());
    let result = compare_overlap(&first, &second, &report, &mut out);
    // Keep whatever was written before a failed lookup.
    out.flush()?;
    result
}
