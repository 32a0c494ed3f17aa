//! Engine error types
//!
//! Command handlers never fail; these errors only surface from constructors,
//! the history codec and placement.

use thiserror::Error;

/// Rejected input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("score history line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("player name is {len} characters, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("grid {width}x{height} is smaller than the {min}x{min} minimum")]
    GridTooSmall { width: i32, height: i32, min: i32 },

    #[error("grid {width}x{height} is larger than the {max}x{max} maximum")]
    GridTooLarge { width: i32, height: i32, max: i32 },
}

/// Placement search that could not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell left to place food")]
    NoFreeCell,
}
