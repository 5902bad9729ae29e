//! File-level processing: extension gate, line splitting, outcome shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assignment::build_assignments;
use crate::error::ScanError;
use crate::overlap::{PairReport, longest_period};

pub const MSG_LOADED: &str = "File Loaded";
pub const MSG_INVALID: &str = "Invalid or empty file!";
pub const MSG_UNSUPPORTED: &str = "File not supported! Only .txt and .csv files supported!";

/// Outcome of processing one file: a report when the file loaded, plus a
/// human-readable message either way. This is the shape both the batch
/// CLI and any interactive front end consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub data: Option<PairReport>,
    pub message: String,
}

impl FileOutcome {
    fn rejected(message: &str) -> Self {
        Self {
            data: None,
            message: message.to_string(),
        }
    }
}

/// Process one file's text content.
///
/// `extension` is matched exactly against `txt` and `csv`; for csv the
/// first non-blank line is discarded as a header without inspection.
/// Blank lines are ignored throughout. `now` is the instant `NULL` date
/// fields resolve to.
///
/// A malformed row (fewer than 4 fields) aborts the call with an error;
/// every other failure resolves to a clean rejection outcome.
pub fn process_file_text(
    text: &str,
    extension: &str,
    now: DateTime<Utc>,
) -> Result<FileOutcome, ScanError> {
    if extension != "txt" && extension != "csv" {
        return Ok(FileOutcome::rejected(MSG_UNSUPPORTED));
    }

    let mut lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

    // The first row of a .csv file is a header; drop it unconditionally.
    if extension == "csv" && !lines.is_empty() {
        lines.remove(0);
    }

    match build_assignments(&lines, now)? {
        Some(assignments) => {
            info!(rows = assignments.len(), "file loaded");
            Ok(FileOutcome {
                data: Some(longest_period(&assignments)),
                message: MSG_LOADED.to_string(),
            })
        }
        None => Ok(FileOutcome::rejected(MSG_INVALID)),
    }
}
