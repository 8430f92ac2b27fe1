//! Whole-sample content classification.
//!
//! A column is classified as a unit: every remaining cell must match a
//! category's pattern for the column to take that category. A single cell
//! that matches nothing demotes the whole sample to [`Category::Strings`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::strip_placeholder;

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)?%$").expect("percentage pattern is valid")
});

static BYTE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)? ?[KMG]?B$").expect("byte size pattern is valid")
});

pub(crate) static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("number pattern is valid"));

/// Inferred content type of a column sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No data: an empty sample or one made only of blank placeholders.
    None,
    /// Free text, compared lexicographically.
    Strings,
    /// Plain decimals such as `12` or `0.75`.
    Numbers,
    /// Decimals with a trailing `%`.
    Percentage,
    /// Sizes such as `500 B`, `1.5 KB` or `2MB`.
    ByteSize,
    /// No recognised category. Never produced by [`classify`].
    Unknown,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::None,
        Category::Strings,
        Category::Numbers,
        Category::Percentage,
        Category::ByteSize,
        Category::Unknown,
    ];

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Strings => "strings",
            Category::Numbers => "numbers",
            Category::Percentage => "percentage",
            Category::ByteSize => "byte_size",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "null" | "empty" => Ok(Category::None),
            "strings" | "string" | "text" => Ok(Category::Strings),
            "numbers" | "number" => Ok(Category::Numbers),
            "percentage" | "percent" => Ok(Category::Percentage),
            "byte_size" | "bytesize" | "size" => Ok(Category::ByteSize),
            "unknown" => Ok(Category::Unknown),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Classifies a column sample.
///
/// An empty sample, or one holding nothing but blank placeholders, is
/// [`Category::None`]. Otherwise the first blank placeholder is dropped and
/// the remaining cells are tested against percentage, byte size and plain
/// number patterns in that order; the first pattern every cell matches wins,
/// and [`Category::Strings`] is the fallback.
///
/// ```
/// use sortwise_core::{classify, Category};
///
/// assert_eq!(classify(&["10%", "20%", "5%"]), Category::Percentage);
/// assert_eq!(classify(&["", "3", "1", "2"]), Category::Numbers);
/// assert_eq!(classify(&["10", "abc"]), Category::Strings);
/// ```
pub fn classify<S: AsRef<str>>(sample: &[S]) -> Category {
    if sample.iter().all(|cell| cell.as_ref().is_empty()) {
        return Category::None;
    }

    let category = classify_cells(&strip_placeholder(sample));
    tracing::trace!(cells = sample.len(), %category, "classified column sample");
    category
}

pub(crate) fn classify_cells(cells: &[&str]) -> Category {
    if cells.is_empty() {
        return Category::None;
    }

    let all_match = |pattern: &Regex| cells.iter().all(|cell| pattern.is_match(cell));

    if all_match(&PERCENTAGE) {
        Category::Percentage
    } else if all_match(&BYTE_SIZE) {
        Category::ByteSize
    } else if all_match(&NUMBER) {
        Category::Numbers
    } else {
        Category::Strings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(classify(&empty), Category::None);
    }

    #[test]
    fn blank_only_samples_are_none() {
        assert_eq!(classify(&[""]), Category::None);
        assert_eq!(classify(&["", "", ""]), Category::None);
    }

    #[test]
    fn percentages() {
        assert_eq!(classify(&["10%", "20.5%", "5%"]), Category::Percentage);
    }

    #[test]
    fn byte_sizes_with_and_without_space() {
        assert_eq!(classify(&["1 KB", "2 MB", "500 B"]), Category::ByteSize);
        assert_eq!(classify(&["1KB", "3.5GB", "12B"]), Category::ByteSize);
    }

    #[test]
    fn byte_size_units_are_case_sensitive() {
        assert_eq!(classify(&["1 kb", "2 MB"]), Category::Strings);
    }

    #[test]
    fn numbers() {
        assert_eq!(classify(&["3", "1.25", "200"]), Category::Numbers);
    }

    #[test]
    fn single_placeholder_is_ignored() {
        assert_eq!(classify(&["", "3", "1", "2"]), Category::Numbers);
    }

    #[test]
    fn second_placeholder_demotes_to_strings() {
        assert_eq!(classify(&["", "3", "", "2"]), Category::Strings);
    }

    #[test]
    fn one_mismatch_demotes_whole_sample() {
        assert_eq!(classify(&["10", "abc"]), Category::Strings);
        assert_eq!(classify(&["10%", "20"]), Category::Strings);
    }

    #[test]
    fn signs_exponents_and_separators_are_strings() {
        assert_eq!(classify(&["-1", "2"]), Category::Strings);
        assert_eq!(classify(&["1e3", "2"]), Category::Strings);
        assert_eq!(classify(&["1,000", "2"]), Category::Strings);
        assert_eq!(classify(&["5.", "2"]), Category::Strings);
    }

    #[test]
    fn plain_strings() {
        assert_eq!(classify(&["acl", "bash", "zlib"]), Category::Strings);
    }

    #[test]
    fn category_names_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("size".parse::<Category>(), Ok(Category::ByteSize));
        assert!("decimal".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::ByteSize).unwrap(),
            "\"byte_size\""
        );
    }
}
