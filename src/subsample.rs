// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{BufRead, Write};

use rand::Rng;

use crate::errors::AlnUtilsError;
use crate::seq::fasta::FastaReader;
use crate::seq::write::write_record;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SampleStats {
    pub seen: usize,
    pub kept: usize,
}

/// Keeps each record independently with probability `rate`: one uniform draw in [0, 1) per
/// record, kept iff the draw is below `rate`. The rate is not range-checked, so `rate <= 0` (or
/// NaN) keeps nothing and `rate >= 1` keeps everything. Input order is preserved.
pub fn subsample<R: BufRead, W: Write, G: Rng + ?Sized>(
    reader: R,
    rate: f64,
    rng: &mut G,
    out: &mut W,
) -> Result<SampleStats, AlnUtilsError> {
    let mut stats = SampleStats::default();
    for record in FastaReader::new(reader) {
        let record = record?;
        stats.seen += 1;
        if rng.gen::<f64>() < rate {
            stats.kept += 1;
            write_record(out, record.id(), &record.sequence)?;
        }
    }
    Ok(stats)
}
