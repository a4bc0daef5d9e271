// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum AlnUtilsError {
    Io(io::Error),
    Format(String),
    Json(serde_json::Error),
    /// An identifier listed in the diff report is absent from one of the alignments.
    MissingId { id: String, alignment: String },
}

// These allow conversion to AlnUtilsError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for AlnUtilsError {
    fn from(e: io::Error) -> Self {
        AlnUtilsError::Io(e)
    }
}

impl From<serde_json::Error> for AlnUtilsError {
    fn from(e: serde_json::Error) -> Self {
        AlnUtilsError::Json(e)
    }
}

impl fmt::Display for AlnUtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlnUtilsError::Io(e) => write!(f, "I/O error: {}", e),
            AlnUtilsError::Format(msg) => write!(f, "Format error: {}", msg),
            AlnUtilsError::Json(e) => write!(f, "JSON error: {}", e),
            AlnUtilsError::MissingId { id, alignment } => {
                write!(f, "Sequence '{}' not found in {} alignment", id, alignment)
            }
        }
    }
}

impl error::Error for AlnUtilsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AlnUtilsError::Io(e) => Some(e),
            AlnUtilsError::Json(e) => Some(e),
            _ => None,
        }
    }
}
