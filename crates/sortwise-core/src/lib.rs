//! # sortwise-core
//!
//! Pure classification and order-verification for the text of a rendered
//! table column.
//!
//! A data-table UI renders every cell as text. To assert that clicking a
//! column heading sorted the table, a test needs to know what kind of text
//! the column holds and then compare it the way that kind of value sorts:
//!
//! - [`classify`] inspects a whole column sample and assigns one
//!   [`Category`] (empty, strings, numbers, percentages, byte sizes).
//! - [`is_ordered`] decides whether the sample is non-decreasing
//!   ([`Direction::Ascending`]) or non-increasing ([`Direction::Descending`])
//!   under that category's comparator.
//! - [`toggle`] turns two successive reads of a column (before and after a
//!   heading click) into a pass/fail [`Verdict`].
//!
//! Nothing here performs I/O. Browser access lives in `sortwise-browser`;
//! the CLI wires both together.
//!
//! ## Example
//!
//! ```
//! use sortwise_core::{classify, is_ordered, Category, Direction};
//!
//! let sizes = ["500 B", "1 KB", "2 MB"];
//! assert_eq!(classify(&sizes), Category::ByteSize);
//! assert!(is_ordered(&sizes, Direction::Ascending).unwrap());
//! assert!(!is_ordered(&sizes, Direction::Descending).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod error;
pub mod order;
pub mod text;
pub mod toggle;
pub mod units;

pub use category::{classify, Category};
pub use error::{OrderError, Result};
pub use order::{is_inverted, is_ordered, is_ordered_as, is_sequenced, Direction, OrderChecker};
pub use text::{extract_numbers, strip_placeholder};
pub use toggle::{
    expect_after_toggle, observe, verify_default_order, verify_toggle, Expectation, Observed,
    Verdict,
};
pub use units::{parse_byte_size, ByteUnit, UnitPolicy};
