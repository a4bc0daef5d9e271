// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{BufRead, Write};

use log::debug;

use crate::errors::AlnUtilsError;
use crate::seq::fasta::FastaReader;
use crate::seq::write::write_record;

/// Writes the first record whose id equals `target` and stops reading. Returns whether a record
/// was found; not finding one is not an error.
pub fn extract<R: BufRead, W: Write>(
    reader: R,
    target: &str,
    out: &mut W,
) -> Result<bool, AlnUtilsError> {
    for (n, record) in FastaReader::new(reader).enumerate() {
        let record = record?;
        if record.id() == target {
            debug!("found '{}' at record #{}", target, n + 1);
            write_record(out, record.id(), &record.sequence)?;
            return Ok(true);
        }
    }
    Ok(false)
}
