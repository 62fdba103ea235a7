//! The pair-number ↔ color-pair bijection.
//!
//! A pair number n in 1..=25 maps to major index (n-1)/5 and minor index
//! (n-1)%5; the major color varies slowest. The two fixed tables live in
//! [`crate::domain::types`] and never change at runtime, so every function
//! here is pure.

// Index arithmetic is bounds-checked before any narrowing cast
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::domain::{Axis, CodecError, ColorPair, MajorColor, MinorColor, PairNumber};

/// Convert a 1-based pair number into its color pair.
///
/// Every integer outside 1..=25 fails with [`CodecError::OutOfRange`]. Zero
/// and negative numbers fail on the major axis: once shifted to 0-based
/// form, the derived major index is the one that leaves its table.
pub fn color_pair_from_number(number: i64) -> Result<ColorPair, CodecError> {
    // Checked before the 0-based shift so the subtraction cannot overflow
    if number < 1 {
        return Err(CodecError::OutOfRange { axis: Axis::Major, number });
    }
    let zero_based = number - 1;

    let major_index = zero_based / MinorColor::ALL.len() as i64;
    if major_index >= MajorColor::ALL.len() as i64 {
        return Err(CodecError::OutOfRange { axis: Axis::Major, number });
    }

    // Mirrors the major-axis check; (n-1) % 5 cannot leave the minor table
    let minor_index = zero_based % MinorColor::ALL.len() as i64;
    if minor_index >= MinorColor::ALL.len() as i64 {
        return Err(CodecError::OutOfRange { axis: Axis::Minor, number });
    }

    Ok(ColorPair {
        major: MajorColor::ALL[major_index as usize],
        minor: MinorColor::ALL[minor_index as usize],
    })
}

/// Pair number for an already-validated color pair.
///
/// Infallible: every (major, minor) combination has exactly one pair number.
#[must_use]
pub fn pair_number_from_colors(major: MajorColor, minor: MinorColor) -> PairNumber {
    PairNumber((major.index() * MinorColor::ALL.len() + minor.index() + 1) as u8)
}

/// Look up a color pair by name and return its pair number.
///
/// The major name is resolved first; if both names are unknown, the major
/// error is the one reported.
pub fn pair_number_from_names(major: &str, minor: &str) -> Result<PairNumber, CodecError> {
    let major = MajorColor::from_name(major).ok_or_else(|| CodecError::UnknownColor {
        axis: Axis::Major,
        name: major.to_string(),
    })?;
    let minor = MinorColor::from_name(minor).ok_or_else(|| CodecError::UnknownColor {
        axis: Axis::Minor,
        name: minor.to_string(),
    })?;
    Ok(pair_number_from_colors(major, minor))
}

/// All 25 entries of the color code in ascending pair-number order.
///
/// Major colors vary slowest: the first entry is (1, White, Blue) and the
/// last is (25, Violet, Slate). The result is recomputed from the fixed
/// tables on every call.
#[must_use]
pub fn all_pairs() -> Vec<(PairNumber, ColorPair)> {
    let mut pairs = Vec::with_capacity(MajorColor::ALL.len() * MinorColor::ALL.len());
    for major in MajorColor::ALL {
        for minor in MinorColor::ALL {
            pairs.push((pair_number_from_colors(major, minor), ColorPair { major, minor }));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_pair() {
        let pair = color_pair_from_number(4).unwrap();
        assert_eq!(pair.major, MajorColor::White);
        assert_eq!(pair.minor, MinorColor::Brown);

        let pair = color_pair_from_number(10).unwrap();
        assert_eq!(pair.major, MajorColor::Red);
        assert_eq!(pair.minor, MinorColor::Slate);
    }

    #[test]
    fn test_group_boundaries() {
        // Last pair of one major group, first pair of the next
        assert_eq!(color_pair_from_number(5).unwrap().to_string(), "White Slate");
        assert_eq!(color_pair_from_number(6).unwrap().to_string(), "Red Blue");
        assert_eq!(color_pair_from_number(21).unwrap().to_string(), "Violet Blue");
    }

    #[test]
    fn test_pair_to_number() {
        assert_eq!(pair_number_from_names("Black", "Orange").unwrap(), PairNumber(12));
        assert_eq!(pair_number_from_names("Violet", "Slate").unwrap(), PairNumber(25));
        assert_eq!(pair_number_from_names("Red", "Slate").unwrap(), PairNumber(10));
    }

    #[test]
    fn test_zero_and_negative_fail_on_major_axis() {
        for number in [0, -1, -5] {
            let err = color_pair_from_number(number).unwrap_err();
            assert_eq!(err, CodecError::OutOfRange { axis: Axis::Major, number });
        }
    }

    #[test]
    fn test_above_range_fails() {
        let err = color_pair_from_number(26).unwrap_err();
        assert_eq!(err, CodecError::OutOfRange { axis: Axis::Major, number: 26 });
    }

    #[test]
    fn test_unknown_color_axis_tagging() {
        let err = pair_number_from_names("Pink", "Blue").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownColor { axis: Axis::Major, name: "Pink".to_string() }
        );

        let err = pair_number_from_names("White", "Pink").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownColor { axis: Axis::Minor, name: "Pink".to_string() }
        );
    }

    #[test]
    fn test_major_checked_before_minor() {
        let err = pair_number_from_names("Pink", "Mauve").unwrap_err();
        assert!(matches!(err, CodecError::UnknownColor { axis: Axis::Major, .. }));
    }
}
