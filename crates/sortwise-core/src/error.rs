//! Error types for order verification.

use thiserror::Error;

use crate::category::Category;

/// Failure to produce an order verdict for a column sample.
///
/// Both variants are local to the checker and never retried; the caller
/// decides whether a failure becomes a failed test case or an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The category has no comparator.
    ///
    /// The classifier always falls back to [`Category::Strings`], so this is
    /// only reached when a caller declares [`Category::Unknown`] explicitly.
    #[error("no comparator for '{category}' samples")]
    Classification {
        /// Category the checker was asked to compare under
        category: Category,
    },

    /// An element could not be read as a value of its category.
    #[error("cannot read '{element}' as {category}: {reason}")]
    MalformedElement {
        /// The offending cell text
        element: String,
        /// Category the element was parsed for
        category: Category,
        /// Why parsing failed
        reason: String,
    },
}

impl OrderError {
    pub(crate) fn malformed(element: &str, category: Category, reason: impl Into<String>) -> Self {
        Self::MalformedElement {
            element: element.to_string(),
            category,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for order verification.
pub type Result<T> = std::result::Result<T, OrderError>;
