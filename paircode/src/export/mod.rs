//! Manual export functionality
//!
//! This module provides functionality for exporting the reference manual in
//! machine-readable formats. Currently supports JSON.

pub mod json;

pub use json::{ManualEntry, ManualExporter};
