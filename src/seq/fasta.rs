// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::{debug, warn};

use crate::errors::AlnUtilsError;
use crate::seq::file::SeqMap;
use crate::seq::record::SeqRecord;

/// Streams FastA records one at a time, so callers can stop early without reading the whole
/// input.
///
/// Sequence lines are concatenated with spaces and carriage returns removed (other characters,
/// tabs included, are kept) and blank lines are skipped.
/// Anything other than blank lines before the first header is a format error.
pub struct FastaReader<R> {
    lines: Lines<R>,
    // Header of the next record, already consumed from `lines`.
    pending_header: Option<String>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            lines: reader.lines(),
            pending_header: None,
            line_no: 0,
            done: false,
        }
    }

    fn fail(&mut self, e: AlnUtilsError) -> Option<Result<SeqRecord, AlnUtilsError>> {
        self.done = true;
        Some(Err(e))
    }
}

impl FastaReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AlnUtilsError> {
        let file = File::open(path)?;
        Ok(FastaReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SeqRecord, AlnUtilsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut current = self.pending_header.take().map(|header| SeqRecord {
            header,
            sequence: String::new(),
        });
        loop {
            let l = match self.lines.next() {
                None => {
                    self.done = true;
                    return current.map(Ok);
                }
                Some(Err(e)) => return self.fail(e.into()),
                Some(Ok(l)) => l,
            };
            self.line_no += 1;

            if let Some(hdr) = l.strip_prefix('>') {
                let hdr = String::from(hdr.trim_end());
                match current {
                    Some(record) => {
                        self.pending_header = Some(hdr);
                        return Some(Ok(record));
                    }
                    None => {
                        current = Some(SeqRecord {
                            header: hdr,
                            sequence: String::new(),
                        })
                    }
                }
            } else if !l.trim().is_empty() {
                match current.as_mut() {
                    // append line to current record's sequence
                    Some(record) => record
                        .sequence
                        .extend(l.chars().filter(|&c| c != ' ' && c != '\r')),
                    None => {
                        let msg =
                            format!("line {}: sequence data before first header", self.line_no);
                        return self.fail(AlnUtilsError::Format(msg));
                    }
                }
            }
        }
    }
}

/// Loads a whole FastA file keyed by record id. When an id occurs more than once, the last record
/// wins.
pub fn read_fasta_map<P: AsRef<Path>>(path: P) -> Result<SeqMap, AlnUtilsError> {
    let path = path.as_ref();
    let mut map = SeqMap::new();
    for record in FastaReader::from_path(path)? {
        let record = record?;
        let id = String::from(record.id());
        if let Some(_old) = map.insert(id.clone(), record.sequence) {
            warn!("{}: duplicate id '{}', keeping last", path.display(), id);
        }
    }
    debug!("{}: {} distinct ids", path.display(), map.len());
    Ok(map)
}
