// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{self, Write};

/// Writes a two-line FastA entry followed by a blank line: `>{id}\n{sequence}\n\n`.
pub fn write_record<W: Write>(out: &mut W, id: &str, sequence: &str) -> io::Result<()> {
    write!(out, ">{}\n{}\n\n", id, sequence)
}

/// Writes `>[{tag}] {id}\n{sequence}\n`, then `trailer` extra newlines.
pub fn write_tagged_record<W: Write>(
    out: &mut W,
    tag: &str,
    id: &str,
    sequence: &str,
    trailer: usize,
) -> io::Result<()> {
    write!(out, ">[{}] {}\n{}\n", tag, id, sequence)?;
    for _ in 0..trailer {
        out.write_all(b"\n")?;
    }
    Ok(())
}
