//! Byte-size parsing with binary multipliers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::category::Category;
use crate::error::{OrderError, Result};

// Broader than the classifier's pattern: any alphabetic unit token, any
// amount of whitespace. Unit recognition happens after the split.
static SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z]*)$").expect("size token pattern is valid")
});

/// Unit suffix of a rendered byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteUnit {
    /// `B` or no suffix
    Bytes,
    /// `KB`, 1024 bytes
    Kilobytes,
    /// `MB`, 1024² bytes
    Megabytes,
    /// `GB`, 1024³ bytes
    Gigabytes,
}

impl ByteUnit {
    /// Recognises a unit token, ignoring ASCII case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "" | "B" => Some(ByteUnit::Bytes),
            "KB" => Some(ByteUnit::Kilobytes),
            "MB" => Some(ByteUnit::Megabytes),
            "GB" => Some(ByteUnit::Gigabytes),
            _ => None,
        }
    }

    /// Number of bytes in one of this unit.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            ByteUnit::Bytes => 1.0,
            ByteUnit::Kilobytes => 1024.0,
            ByteUnit::Megabytes => 1024.0 * 1024.0,
            ByteUnit::Gigabytes => 1024.0 * 1024.0 * 1024.0,
        }
    }
}

/// How to treat a byte size whose unit token is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPolicy {
    /// Treat the magnitude as bytes and log a warning.
    #[default]
    Lenient,
    /// Reject the element with [`OrderError::MalformedElement`].
    Strict,
}

/// Parses a rendered byte size into a number of bytes.
///
/// ```
/// use sortwise_core::{parse_byte_size, UnitPolicy};
///
/// assert_eq!(parse_byte_size("1 KB", UnitPolicy::Lenient).unwrap(), 1024.0);
/// assert_eq!(parse_byte_size("2MB", UnitPolicy::Strict).unwrap(), 2_097_152.0);
/// ```
///
/// # Errors
///
/// Returns [`OrderError::MalformedElement`] when the text has no leading
/// magnitude, or when the unit is unrecognised under [`UnitPolicy::Strict`].
pub fn parse_byte_size(cell: &str, policy: UnitPolicy) -> Result<f64> {
    let captures = SIZE_TOKEN.captures(cell).ok_or_else(|| {
        OrderError::malformed(cell, Category::ByteSize, "expected a magnitude and a unit")
    })?;

    let magnitude: f64 = captures[1]
        .parse()
        .map_err(|e| OrderError::malformed(cell, Category::ByteSize, format!("{e}")))?;
    let token = &captures[2];

    match (ByteUnit::from_token(token), policy) {
        (Some(unit), _) => Ok(magnitude * unit.multiplier()),
        (None, UnitPolicy::Lenient) => {
            warn!(element = cell, unit = token, "unrecognised size unit, reading as bytes");
            Ok(magnitude)
        }
        (None, UnitPolicy::Strict) => Err(OrderError::malformed(
            cell,
            Category::ByteSize,
            format!("unrecognised unit '{token}'"),
        )),
    }
}
