//! Startup self-test
//!
//! Re-checks the published reference scenarios and the round-trip
//! properties of the codec before any output is produced. A failure here
//! means the built-in tables or the conversion arithmetic are wrong, so the
//! caller treats it as fatal.

use anyhow::{bail, Result};
use log::info;

use crate::codec::{
    all_pairs, color_pair_from_number, pair_number_from_colors, pair_number_from_names,
};
use crate::domain::{MajorColor, MinorColor};

/// Run all self-test checks.
pub fn run_selftest() -> Result<()> {
    check_reference_scenarios()?;
    check_round_trips()?;
    check_manual_coverage()?;
    info!("self-test passed");
    Ok(())
}

/// Spot-check the documented scenarios of the 25-pair color code.
fn check_reference_scenarios() -> Result<()> {
    check_number_to_pair(4, "White", "Brown")?;
    check_number_to_pair(5, "White", "Slate")?;
    check_pair_to_number("Black", "Orange", 12)?;
    check_pair_to_number("Violet", "Slate", 25)?;
    check_pair_to_number("Red", "Orange", 7)?;
    Ok(())
}

fn check_number_to_pair(number: i64, major: &str, minor: &str) -> Result<()> {
    let pair = color_pair_from_number(number)?;
    if pair.major.as_str() != major || pair.minor.as_str() != minor {
        bail!("pair number {number} resolved to {pair}, expected {major} {minor}");
    }
    Ok(())
}

fn check_pair_to_number(major: &str, minor: &str, expected: u8) -> Result<()> {
    let number = pair_number_from_names(major, minor)?;
    if number.get() != expected {
        bail!("colors {major} {minor} resolved to pair {number}, expected {expected}");
    }
    Ok(())
}

/// Both directions of the bijection must agree over the whole domain.
fn check_round_trips() -> Result<()> {
    for number in 1..=25i64 {
        let pair = color_pair_from_number(number)?;
        let back = pair_number_from_names(pair.major.as_str(), pair.minor.as_str())?;
        if i64::from(back.get()) != number {
            bail!("pair number {number} round-tripped to {back}");
        }
    }
    for major in MajorColor::ALL {
        for minor in MinorColor::ALL {
            let number = pair_number_from_colors(major, minor);
            let pair = color_pair_from_number(i64::from(number.get()))?;
            if pair.major != major || pair.minor != minor {
                bail!("colors {major} {minor} round-tripped to {pair}");
            }
        }
    }
    Ok(())
}

/// The manual must cover pair numbers 1..=25 exactly once, in order.
fn check_manual_coverage() -> Result<()> {
    let pairs = all_pairs();
    if pairs.len() != 25 {
        bail!("manual has {} entries, expected 25", pairs.len());
    }
    for (position, (number, _)) in pairs.iter().enumerate() {
        if usize::from(number.get()) != position + 1 {
            bail!("manual entry at position {position} has pair number {number}");
        }
    }
    Ok(())
}
