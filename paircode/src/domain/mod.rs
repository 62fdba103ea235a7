//! Domain model for paircode
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety via enum and newtype patterns
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{ColorPair, MajorColor, MinorColor, PairNumber};

pub use errors::{Axis, CodecError, ExportError};
