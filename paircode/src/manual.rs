//! Reference manual rendering
//!
//! Formats the full 25-pair table for terminal output. Presentation only:
//! ordering and values come straight from [`crate::codec::all_pairs`] and
//! are never reordered here.

use std::fmt::Write as _;

use crate::codec::all_pairs;

const TITLE: &str = "25-Pair Color Code Reference Manual";
const RULE_WIDTH: usize = 45;

/// Render the reference manual as a single string.
///
/// Title line, `=` rule, column header, `-` rule, one fixed-width row per
/// pair in ascending pair-number order, trailing `=` rule.
#[must_use]
pub fn render_manual() -> String {
    let mut out = String::with_capacity(1024);

    // Writing into a String cannot fail
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{:<8} {:<11} {}", "Pair #", "Major Color", "Minor Color");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for (number, pair) in all_pairs() {
        let _ = writeln!(out, "{:<8} {:<11} {}", number.get(), pair.major.as_str(), pair.minor.as_str());
    }
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    out
}

/// Print the reference manual to stdout.
pub fn print_manual() {
    print!("{}", render_manual());
}
