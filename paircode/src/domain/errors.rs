//! Structured error types for paircode
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::fmt;

use thiserror::Error;

/// Which of the two fixed color tables a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Major,
    Minor,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Major => f.write_str("major"),
            Axis::Minor => f.write_str("minor"),
        }
    }
}

/// Failures of the pair-number ↔ color-pair conversions.
///
/// Exactly two kinds exist: a pair number whose derived index leaves its
/// table, and a color name that is not a member of its table. Both are
/// surfaced immediately - no retry, no recovery, no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{axis} index out of range for pair number {number}")]
    OutOfRange { axis: Axis, number: i64 },

    #[error("unknown {axis} color: {name}")]
    UnknownColor { axis: Axis, name: String },
}

/// Failures while writing the manual to an export sink.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
