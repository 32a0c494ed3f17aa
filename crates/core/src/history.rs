//! Score history line format
//!
//! One record per line: `name|score|timestamp`. Pipes inside a name are not
//! escaped; such a name splits into too many fields and the line is reported
//! as malformed on the next load.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::MAX_NAME_LEN;

/// Timestamp layout used for new records (local time, 12-hour clock)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// One finished round in the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    pub timestamp: String,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            timestamp: timestamp.into(),
        }
    }

    /// Encode as a single line (no trailing newline)
    pub fn to_line(&self) -> String {
        format!("{}|{}|{}", self.name, self.score, self.timestamp)
    }
}

/// Parse a whole history file.
///
/// Blank lines are skipped. Any other line that does not decode fails the
/// whole load with its 1-based line number.
pub fn parse_history(text: &str) -> Result<Vec<ScoreRecord>, ValidationError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, idx + 1)?);
    }
    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> Result<ScoreRecord, ValidationError> {
    let malformed = |reason: String| ValidationError::MalformedRecord {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split('|').collect();
    let [name, score, timestamp] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 fields separated by '|', found {}",
            fields.len()
        )));
    };

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        let err = ValidationError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        };
        return Err(malformed(err.to_string()));
    }

    let score = score
        .parse::<u32>()
        .map_err(|e| malformed(format!("invalid score {:?}: {}", score, e)))?;

    Ok(ScoreRecord::new(*name, score, *timestamp))
}

/// Encode records, one line each, newline-terminated
pub fn format_history(records: &[ScoreRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}
