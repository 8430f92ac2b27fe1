//! Sort-order verification under each category's comparator.
//!
//! Ascending means non-decreasing and descending means non-increasing, so
//! equal neighbours satisfy both directions and a uniform column is ordered
//! either way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{classify, Category, NUMBER};
use crate::error::{OrderError, Result};
use crate::text::strip_placeholder;
use crate::units::{parse_byte_size, UnitPolicy};

/// Direction a column is expected to be sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Non-decreasing ("sequenced")
    Ascending,
    /// Non-increasing ("inverted")
    Descending,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    fn admits<T: PartialOrd + ?Sized>(self, earlier: &T, later: &T) -> bool {
        match self {
            Direction::Ascending => earlier <= later,
            Direction::Descending => earlier >= later,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "sequenced" => Ok(Direction::Ascending),
            "desc" | "descending" | "inverted" => Ok(Direction::Descending),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Order checker with configurable byte-size unit handling.
///
/// The free functions in this module use `OrderChecker::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderChecker {
    units: UnitPolicy,
}

impl OrderChecker {
    /// Creates a checker with lenient unit handling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how unrecognised byte-size units are treated.
    #[must_use]
    pub fn with_unit_policy(mut self, units: UnitPolicy) -> Self {
        self.units = units;
        self
    }

    /// Checks `sample` against `direction` under its inferred category.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError::MalformedElement`] from value parsing.
    pub fn is_ordered<S: AsRef<str>>(&self, sample: &[S], direction: Direction) -> Result<bool> {
        self.is_ordered_as(sample, classify(sample), direction)
    }

    /// Checks `sample` against `direction` under a declared category.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Classification`] for [`Category::Unknown`] and
    /// [`OrderError::MalformedElement`] when a cell does not parse as the
    /// declared category.
    pub fn is_ordered_as<S: AsRef<str>>(
        &self,
        sample: &[S],
        category: Category,
        direction: Direction,
    ) -> Result<bool> {
        let cells = strip_placeholder(sample);

        let ordered = match category {
            Category::None => true,
            Category::Strings => monotonic(&cells, direction),
            Category::Numbers => monotonic(&parse_all(&cells, parse_number)?, direction),
            Category::Percentage => monotonic(&parse_all(&cells, parse_percentage)?, direction),
            Category::ByteSize => {
                let bytes = parse_all(&cells, |cell| parse_byte_size(cell, self.units))?;
                monotonic(&bytes, direction)
            }
            Category::Unknown => return Err(OrderError::Classification { category }),
        };

        debug!(%category, %direction, cells = cells.len(), ordered, "checked column order");
        Ok(ordered)
    }
}

/// Returns whether `sample` is sorted in `direction` under its inferred
/// category, after dropping one blank placeholder.
///
/// ```
/// use sortwise_core::{is_ordered, Direction};
///
/// assert!(is_ordered(&["acl", "bash", "zlib"], Direction::Ascending).unwrap());
/// assert!(!is_ordered(&["10%", "20%", "5%"], Direction::Descending).unwrap());
/// ```
///
/// # Errors
///
/// See [`OrderChecker::is_ordered`].
pub fn is_ordered<S: AsRef<str>>(sample: &[S], direction: Direction) -> Result<bool> {
    OrderChecker::default().is_ordered(sample, direction)
}

/// Like [`is_ordered`] but compares under a declared category.
///
/// # Errors
///
/// See [`OrderChecker::is_ordered_as`].
pub fn is_ordered_as<S: AsRef<str>>(
    sample: &[S],
    category: Category,
    direction: Direction,
) -> Result<bool> {
    OrderChecker::default().is_ordered_as(sample, category, direction)
}

/// Shorthand for `is_ordered(sample, Direction::Ascending)`.
///
/// # Errors
///
/// See [`OrderChecker::is_ordered`].
pub fn is_sequenced<S: AsRef<str>>(sample: &[S]) -> Result<bool> {
    is_ordered(sample, Direction::Ascending)
}

/// Shorthand for `is_ordered(sample, Direction::Descending)`.
///
/// # Errors
///
/// See [`OrderChecker::is_ordered`].
pub fn is_inverted<S: AsRef<str>>(sample: &[S]) -> Result<bool> {
    is_ordered(sample, Direction::Descending)
}

fn monotonic<T: PartialOrd>(values: &[T], direction: Direction) -> bool {
    values
        .windows(2)
        .all(|pair| direction.admits(&pair[0], &pair[1]))
}

fn parse_all<F>(cells: &[&str], parse: F) -> Result<Vec<f64>>
where
    F: Fn(&str) -> Result<f64>,
{
    cells.iter().map(|cell| parse(cell)).collect()
}

fn parse_number(cell: &str) -> Result<f64> {
    parse_decimal(cell, cell, Category::Numbers)
}

fn parse_percentage(cell: &str) -> Result<f64> {
    let digits = cell
        .strip_suffix('%')
        .ok_or_else(|| OrderError::malformed(cell, Category::Percentage, "missing '%' suffix"))?;
    parse_decimal(cell, digits, Category::Percentage)
}

// Regex-guarded so only plain decimals ever reach the float parser.
fn parse_decimal(cell: &str, digits: &str, category: Category) -> Result<f64> {
    if !NUMBER.is_match(digits) {
        return Err(OrderError::malformed(cell, category, "not a plain decimal number"));
    }
    digits
        .parse()
        .map_err(|e| OrderError::malformed(cell, category, format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_ordered_both_ways() {
        let empty: [&str; 0] = [];
        for direction in [Direction::Ascending, Direction::Descending] {
            assert!(is_ordered(&empty, direction).unwrap());
            assert!(is_ordered(&["", ""], direction).unwrap());
        }
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(is_sequenced(&["acl", "bash", "zlib"]).unwrap());
        assert!(is_inverted(&["zlib", "bash", "acl"]).unwrap());
        // "10" < "9" as text
        assert!(is_sequenced(&["10", "9", "x"]).unwrap());
    }

    #[test]
    fn numbers_compare_numerically() {
        assert!(is_sequenced(&["2", "10", "10.5"]).unwrap());
        assert!(!is_sequenced(&["10", "9"]).unwrap());
        assert!(is_inverted(&["10", "9"]).unwrap());
    }

    #[test]
    fn placeholder_is_skipped_before_comparing() {
        assert!(!is_sequenced(&["", "3", "1", "2"]).unwrap());
        assert!(is_sequenced(&["1", "", "2", "3"]).unwrap());
    }

    #[test]
    fn percentages_neither_direction() {
        let sample = ["10%", "20%", "5%"];
        assert!(!is_sequenced(&sample).unwrap());
        assert!(!is_inverted(&sample).unwrap());
        assert!(is_inverted(&["90%", "12.5%", "3%"]).unwrap());
    }

    #[test]
    fn byte_sizes_neither_direction() {
        let sample = ["1 KB", "2 MB", "500 B"];
        assert!(!is_sequenced(&sample).unwrap());
        assert!(!is_inverted(&sample).unwrap());
    }

    #[test]
    fn byte_sizes_normalise_units() {
        assert!(is_sequenced(&["900 B", "1 KB", "1023 KB", "1 MB", "1 GB"]).unwrap());
        assert!(is_inverted(&["2GB", "2048MB", "1MB"]).unwrap());
    }

    #[test]
    fn ties_satisfy_both_directions() {
        for sample in [["5", "5", "5"], ["7%", "7%", "7%"], ["a", "a", "a"]] {
            assert!(is_sequenced(&sample).unwrap());
            assert!(is_inverted(&sample).unwrap());
        }
        assert!(is_sequenced(&["1 KB", "1024 B"]).unwrap());
        assert!(is_inverted(&["1 KB", "1024 B"]).unwrap());
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = is_ordered_as(&["a"], Category::Unknown, Direction::Ascending).unwrap_err();
        assert_eq!(
            err,
            OrderError::Classification {
                category: Category::Unknown
            }
        );
    }

    #[test]
    fn declared_category_must_parse() {
        let err = is_ordered_as(&["1", "abc"], Category::Numbers, Direction::Ascending)
            .unwrap_err();
        assert!(matches!(
            err,
            OrderError::MalformedElement { ref element, category: Category::Numbers, .. }
                if element == "abc"
        ));

        assert!(is_ordered_as(&["5", "10%"], Category::Percentage, Direction::Ascending).is_err());
    }

    #[test]
    fn declared_category_overrides_inference() {
        // Inferred as numbers this is ascending; as text "10" sorts before "9"
        let sample = ["9", "10"];
        assert!(is_sequenced(&sample).unwrap());
        assert!(!is_ordered_as(&sample, Category::Strings, Direction::Ascending).unwrap());
    }

    #[test]
    fn strict_checker_rejects_unknown_units() {
        let sample = ["1 TB", "2 KB"];
        let lenient = OrderChecker::new();
        let strict = OrderChecker::new().with_unit_policy(UnitPolicy::Strict);

        // Lenient reads "1 TB" as one byte
        assert!(lenient
            .is_ordered_as(&sample, Category::ByteSize, Direction::Ascending)
            .unwrap());
        assert!(strict
            .is_ordered_as(&sample, Category::ByteSize, Direction::Ascending)
            .is_err());
    }

    #[test]
    fn direction_parsing_and_reversal() {
        assert_eq!("asc".parse::<Direction>(), Ok(Direction::Ascending));
        assert_eq!("Inverted".parse::<Direction>(), Ok(Direction::Descending));
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Ascending.reversed(), Direction::Descending);
    }
}
