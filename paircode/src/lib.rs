//! # paircode - 25-Pair Color Code Reference Tool
//!
//! Converts between 1-based pair numbers and (major, minor) color pairs per
//! the telecommunications 25-pair color code, and renders the full reference
//! manual for terminal display.
//!
//! ## Numbering Scheme
//!
//! ```text
//! pair_number = major_index * 5 + minor_index + 1
//!
//!              Blue  Orange Green Brown Slate
//!     White      1      2     3     4     5
//!     Red        6      7     8     9    10
//!     Black     11     12    13    14    15
//!     Yellow    16     17    18    19    20
//!     Violet    21     22    23    24    25
//! ```
//!
//! The major color varies slowest. Both color tables are fixed for the
//! process lifetime, so every conversion is a pure function over them and
//! safe to call from any thread without synchronization.
//!
//! ## Module Structure
//!
//! - [`codec`]: the pair-number ↔ color-pair bijection
//! - [`domain`]: fixed color tables, pair numbers, structured errors
//! - [`manual`]: fixed-width reference-table rendering
//! - [`export`]: JSON export of the manual for external tooling
//! - [`selftest`]: startup assertion chain over the published scenarios
//! - [`cli`]: command-line argument parsing
//!
//! ## Typical Usage
//!
//! ```bash
//! # Self-test, then print the full manual
//! paircode
//!
//! # Look up a single pair number
//! paircode 12
//!
//! # Look up the number for a color pair
//! paircode --colors Black Orange
//!
//! # Write the manual as JSON
//! paircode --export manual.json
//! ```

// Expose modules for testing
pub mod cli;
pub mod codec;
pub mod domain;
pub mod export;
pub mod manual;
pub mod selftest;
