//! Small text helpers shared by the classifier, the checker and callers that
//! read numbers out of rendered labels.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Returns the sample with its first blank placeholder removed.
///
/// Only one placeholder is dropped. A second blank cell is kept and takes
/// part in classification like any other value.
pub fn strip_placeholder<S: AsRef<str>>(sample: &[S]) -> Vec<&str> {
    let mut cells: Vec<&str> = sample.iter().map(AsRef::as_ref).collect();
    if let Some(blank) = cells.iter().position(|cell| cell.is_empty()) {
        cells.remove(blank);
    }
    cells
}

/// Returns every maximal run of ASCII digits in `text`, in order.
///
/// ```
/// use sortwise_core::extract_numbers;
///
/// assert_eq!(extract_numbers("showing 25 of 130 builds"), vec!["25", "130"]);
/// ```
pub fn extract_numbers(text: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect()
}
