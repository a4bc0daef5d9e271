// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use serde::Deserialize;

use crate::errors::AlnUtilsError;
use crate::seq::file::SeqMap;
use crate::seq::write::write_tagged_record;

// Header tags. The second one is spelled "cawalign" in existing output.
pub const FIRST_TAG: &str = "bealign";
pub const SECOND_TAG: &str = "cawalign";

/// The part of a FASTA diff report we use. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateReport {
    pub updated_sequences: Vec<String>,
}

impl UpdateReport {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AlnUtilsError> {
        let file = File::open(path)?;
        let report = serde_json::from_reader(BufReader::new(file))?;
        Ok(report)
    }
}

fn lookup<'a>(map: &'a SeqMap, id: &str, alignment: &str) -> Result<&'a str, AlnUtilsError> {
    map.get(id)
        .map(String::as_str)
        .ok_or_else(|| AlnUtilsError::MissingId {
            id: String::from(id),
            alignment: String::from(alignment),
        })
}

/// For each id in the report, in report order, writes its sequence from the first alignment and
/// then from the second. An id missing from either alignment is an error; whatever was written
/// for earlier ids stays written.
pub fn compare_overlap<W: Write>(
    first: &SeqMap,
    second: &SeqMap,
    report: &UpdateReport,
    out: &mut W,
) -> Result<(), AlnUtilsError> {
    for id in &report.updated_sequences {
        let seq = lookup(first, id, FIRST_TAG)?;
        write_tagged_record(out, FIRST_TAG, id, seq, 1)?;
        let seq = lookup(second, id, SECOND_TAG)?;
        write_tagged_record(out, SECOND_TAG, id, seq, 2)?;
    }
    Ok(())
}
