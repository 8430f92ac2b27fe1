//! Verdicts for sortable column headings.
//!
//! Clicking a sortable heading puts the column into some order, and clicking
//! it again must flip that order. There is no agreed "first click" order, so
//! the first read only decides what the second read has to show:
//!
//! | first read            | second read must be                |
//! |-----------------------|------------------------------------|
//! | empty or uniform      | any order                          |
//! | descending            | ascending                          |
//! | ascending             | descending                         |
//! | unordered             | nothing passes                     |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{classify, Category};
use crate::error::Result;
use crate::order::{is_ordered, Direction};

/// Order observed in one read of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Observed {
    /// No data in the column
    Empty,
    /// Every value compares equal, so both directions hold
    Uniform,
    /// Non-decreasing and not uniform
    Ascending,
    /// Non-increasing and not uniform
    Descending,
    /// Neither direction holds
    Unordered,
}

impl Observed {
    /// Returns true if this observation satisfies `expectation`.
    #[must_use]
    pub fn satisfies(self, expectation: Expectation) -> bool {
        match expectation {
            Expectation::AnyOrder => self != Observed::Unordered,
            Expectation::Exactly(Direction::Ascending) => matches!(
                self,
                Observed::Ascending | Observed::Uniform | Observed::Empty
            ),
            Expectation::Exactly(Direction::Descending) => matches!(
                self,
                Observed::Descending | Observed::Uniform | Observed::Empty
            ),
            Expectation::Unsatisfiable => false,
        }
    }
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Observed::Empty => "empty",
            Observed::Uniform => "uniform",
            Observed::Ascending => "ascending",
            Observed::Descending => "descending",
            Observed::Unordered => "unordered",
        };
        f.write_str(name)
    }
}

/// What a column read has to show to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Any order, including uniform and empty
    AnyOrder,
    /// Sorted in the given direction (uniform and empty also pass)
    Exactly(Direction),
    /// The column was already unordered before toggling
    Unsatisfiable,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::AnyOrder => f.write_str("any order"),
            Expectation::Exactly(direction) => write!(f, "{direction} order"),
            Expectation::Unsatisfiable => f.write_str("an ordered column before toggling"),
        }
    }
}

/// Outcome of a column assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The column met the expectation
    Pass,
    /// The column did not meet the expectation
    Fail {
        /// What was required
        expected: Expectation,
        /// What the failing read showed
        observed: Observed,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    fn judge(observed: Observed, expected: Expectation) -> Self {
        if observed.satisfies(expected) {
            Verdict::Pass
        } else {
            Verdict::Fail { expected, observed }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("pass"),
            Verdict::Fail { expected, observed } => {
                write!(f, "expected {expected}, observed {observed}")
            }
        }
    }
}

/// Reads the order of a column sample.
///
/// ```
/// use sortwise_core::{observe, Observed};
///
/// assert_eq!(observe(&["3", "2", "1"]).unwrap(), Observed::Descending);
/// assert_eq!(observe(&["a", "a"]).unwrap(), Observed::Uniform);
/// assert_eq!(observe(&[""]).unwrap(), Observed::Empty);
/// ```
///
/// # Errors
///
/// Propagates order-check errors.
pub fn observe<S: AsRef<str>>(sample: &[S]) -> Result<Observed> {
    if classify(sample) == Category::None {
        return Ok(Observed::Empty);
    }

    let ascending = is_ordered(sample, Direction::Ascending)?;
    let descending = is_ordered(sample, Direction::Descending)?;

    Ok(match (ascending, descending) {
        (true, true) => Observed::Uniform,
        (true, false) => Observed::Ascending,
        (false, true) => Observed::Descending,
        (false, false) => Observed::Unordered,
    })
}

/// What the second read must show given the first read.
#[must_use]
pub fn expect_after_toggle(first: Observed) -> Expectation {
    match first {
        Observed::Empty | Observed::Uniform => Expectation::AnyOrder,
        Observed::Ascending => Expectation::Exactly(Direction::Descending),
        Observed::Descending => Expectation::Exactly(Direction::Ascending),
        Observed::Unordered => Expectation::Unsatisfiable,
    }
}

/// Judges two successive reads of a column around a heading click.
///
/// An unordered first read fails on its own; the reported observation is then
/// the first read.
#[must_use]
pub fn verify_toggle(first: Observed, second: Observed) -> Verdict {
    match expect_after_toggle(first) {
        Expectation::Unsatisfiable => Verdict::Fail {
            expected: Expectation::Unsatisfiable,
            observed: first,
        },
        expected => Verdict::judge(second, expected),
    }
}

/// Judges a column that must already be sorted in `direction`, such as the
/// default sort of a freshly loaded table.
///
/// # Errors
///
/// Propagates order-check errors.
pub fn verify_default_order<S: AsRef<str>>(sample: &[S], direction: Direction) -> Result<Verdict> {
    let observed = observe(sample)?;
    Ok(Verdict::judge(observed, Expectation::Exactly(direction)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_classifies_every_shape() {
        assert_eq!(observe(&["1", "2", "3"]).unwrap(), Observed::Ascending);
        assert_eq!(observe(&["3", "2", "1"]).unwrap(), Observed::Descending);
        assert_eq!(observe(&["2", "2"]).unwrap(), Observed::Uniform);
        assert_eq!(observe(&["2", "3", "1"]).unwrap(), Observed::Unordered);
        let empty: [&str; 0] = [];
        assert_eq!(observe(&empty).unwrap(), Observed::Empty);
    }

    #[test]
    fn single_value_is_uniform() {
        assert_eq!(observe(&["only"]).unwrap(), Observed::Uniform);
    }

    #[test]
    fn toggle_flips_direction() {
        assert!(verify_toggle(Observed::Ascending, Observed::Descending).is_pass());
        assert!(verify_toggle(Observed::Descending, Observed::Ascending).is_pass());
    }

    #[test]
    fn toggle_that_keeps_direction_fails() {
        let verdict = verify_toggle(Observed::Ascending, Observed::Ascending);
        assert_eq!(
            verdict,
            Verdict::Fail {
                expected: Expectation::Exactly(Direction::Descending),
                observed: Observed::Ascending,
            }
        );
        assert_eq!(
            verdict.to_string(),
            "expected descending order, observed ascending"
        );
    }

    #[test]
    fn uniform_first_read_accepts_any_order() {
        for second in [
            Observed::Ascending,
            Observed::Descending,
            Observed::Uniform,
            Observed::Empty,
        ] {
            assert!(verify_toggle(Observed::Uniform, second).is_pass());
            assert!(verify_toggle(Observed::Empty, second).is_pass());
        }
        assert!(!verify_toggle(Observed::Uniform, Observed::Unordered).is_pass());
    }

    #[test]
    fn unordered_first_read_always_fails() {
        let verdict = verify_toggle(Observed::Unordered, Observed::Ascending);
        assert_eq!(
            verdict,
            Verdict::Fail {
                expected: Expectation::Unsatisfiable,
                observed: Observed::Unordered,
            }
        );
    }

    #[test]
    fn uniform_second_read_satisfies_a_direction() {
        assert!(verify_toggle(Observed::Ascending, Observed::Uniform).is_pass());
    }

    #[test]
    fn default_order() {
        assert!(verify_default_order(&["acl", "bash", "zlib"], Direction::Ascending)
            .unwrap()
            .is_pass());
        assert!(!verify_default_order(&["zlib", "acl"], Direction::Ascending)
            .unwrap()
            .is_pass());
    }
}
