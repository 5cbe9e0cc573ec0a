//! Configuration types.
//!
//! - [`CompareOptions`]: switches for the deep comparator
//! - [`SizeUnitStyle`]: unit labels for [`human_byte_size`](crate::human_byte_size)
//! - [`PadSide`]: where [`padding`](crate::padding) inserts the fill
//!
//! ## Examples
//!
//! ```rust
//! use strproc::{CompareOptions, Comparator};
//!
//! let options = CompareOptions::new()
//!     .with_recurse_sequences(true)
//!     .with_strict_numeric_types(false);
//! let comparator = Comparator::new(options);
//!
//! assert_eq!(comparator.compare(&vec![1i32, 2], &vec![1i64, 2]), Ok(true));
//! ```

/// Options for the deep comparator.
///
/// The defaults give the strict behavior: identical concrete types are
/// required, and sequence elements are compared as opaque values.
///
/// # Examples
///
/// ```rust
/// use strproc::CompareOptions;
///
/// let options = CompareOptions::new();
/// assert!(!options.recurse_sequences);
/// assert!(options.strict_numeric_types);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    /// Walk into sequence elements and into sequence-valued mapping entries
    /// with the same rules as mappings, so a mismatch deep inside a sequence
    /// is reported with its full path.
    pub recurse_sequences: bool,
    /// Require identical numeric widths. When `false`, numbers of any width
    /// pass the type gate and compare by value.
    pub strict_numeric_types: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            recurse_sequences: false,
            strict_numeric_types: true,
        }
    }
}

impl CompareOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_recurse_sequences(mut self, recurse: bool) -> Self {
        self.recurse_sequences = recurse;
        self
    }

    #[must_use]
    pub fn with_strict_numeric_types(mut self, strict: bool) -> Self {
        self.strict_numeric_types = strict;
        self
    }
}

/// Unit label style for human-readable byte sizes.
///
/// # Examples
///
/// ```rust
/// use strproc::SizeUnitStyle;
///
/// assert_eq!(SizeUnitStyle::UpperCaseDouble.unit(3), "GB");
/// assert_eq!(SizeUnitStyle::CamelCaseLong.unit(3), "GigaByte");
/// assert_eq!(SizeUnitStyle::LowerCaseSingle.unit(0), "b");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SizeUnitStyle {
    /// `b k m g t p e z y`
    LowerCaseSingle,
    /// `b kb mb gb ...`
    LowerCaseDouble,
    /// `B K M G ...`
    UpperCaseSingle,
    /// `B KB MB GB ...`
    #[default]
    UpperCaseDouble,
    /// `B Kb Mb Gb ...`
    CamelCaseDouble,
    /// `Byte KiloByte MegaByte ...`
    CamelCaseLong,
}

const LONG_UNITS: [&str; 9] = [
    "Byte",
    "KiloByte",
    "MegaByte",
    "GigaByte",
    "TeraByte",
    "PetaByte",
    "ExaByte",
    "ZettaByte",
    "YottaByte",
];

const PREFIXES: [&str; 9] = ["", "k", "m", "g", "t", "p", "e", "z", "y"];

impl SizeUnitStyle {
    /// Number of units, from bytes up to yottabytes.
    pub const UNITS: usize = 9;

    /// Returns the label for 1024^`exponent` bytes.
    ///
    /// `exponent` is clamped to the largest unit.
    #[must_use]
    pub fn unit(self, exponent: usize) -> String {
        let exponent = exponent.min(Self::UNITS - 1);
        if exponent == 0 {
            return match self {
                SizeUnitStyle::LowerCaseSingle | SizeUnitStyle::LowerCaseDouble => "b".to_string(),
                SizeUnitStyle::CamelCaseLong => LONG_UNITS[0].to_string(),
                _ => "B".to_string(),
            };
        }
        let prefix = PREFIXES[exponent];
        match self {
            SizeUnitStyle::LowerCaseSingle => prefix.to_string(),
            SizeUnitStyle::LowerCaseDouble => format!("{}b", prefix),
            SizeUnitStyle::UpperCaseSingle => prefix.to_ascii_uppercase(),
            SizeUnitStyle::UpperCaseDouble => format!("{}B", prefix.to_ascii_uppercase()),
            SizeUnitStyle::CamelCaseDouble => format!("{}b", prefix.to_ascii_uppercase()),
            SizeUnitStyle::CamelCaseLong => LONG_UNITS[exponent].to_string(),
        }
    }
}

/// Side on which [`padding`](crate::padding) adds the fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PadSide {
    Left,
    #[default]
    Right,
    /// Half on each side; the extra byte of an odd count goes right.
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_labels_bytes() {
        let labels: Vec<_> = [
            SizeUnitStyle::LowerCaseSingle,
            SizeUnitStyle::LowerCaseDouble,
            SizeUnitStyle::UpperCaseSingle,
            SizeUnitStyle::UpperCaseDouble,
            SizeUnitStyle::CamelCaseDouble,
            SizeUnitStyle::CamelCaseLong,
        ]
        .iter()
        .map(|style| style.unit(0))
        .collect();
        assert_eq!(labels, vec!["b", "b", "B", "B", "B", "Byte"]);
    }

    #[test]
    fn test_kilo_labels() {
        assert_eq!(SizeUnitStyle::LowerCaseSingle.unit(1), "k");
        assert_eq!(SizeUnitStyle::LowerCaseDouble.unit(1), "kb");
        assert_eq!(SizeUnitStyle::UpperCaseSingle.unit(1), "K");
        assert_eq!(SizeUnitStyle::UpperCaseDouble.unit(1), "KB");
        assert_eq!(SizeUnitStyle::CamelCaseDouble.unit(1), "Kb");
        assert_eq!(SizeUnitStyle::CamelCaseLong.unit(1), "KiloByte");
    }

    #[test]
    fn test_exponent_is_clamped() {
        assert_eq!(SizeUnitStyle::CamelCaseLong.unit(42), "YottaByte");
    }

    #[test]
    fn test_builder() {
        let options = CompareOptions::new().with_recurse_sequences(true);
        assert!(options.recurse_sequences);
        assert!(options.strict_numeric_types);
    }
}
