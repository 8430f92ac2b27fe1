//! Value enums accepted on the command line.

use clap::ValueEnum;
use sortwise_core::{Category, Direction};

/// Sort direction to check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Non-decreasing
    #[value(alias = "ascending", alias = "sequenced")]
    Asc,
    /// Non-increasing
    #[value(alias = "descending", alias = "inverted")]
    Desc,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => Direction::Ascending,
            DirectionArg::Desc => Direction::Descending,
        }
    }
}

/// Content category to compare as, instead of inferring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Lexicographic comparison
    #[value(alias = "string", alias = "text")]
    Strings,
    /// Plain decimal numbers
    #[value(alias = "number")]
    Numbers,
    /// Numbers with a trailing `%`
    #[value(alias = "percent")]
    Percentage,
    /// Sizes such as `1.5 MB`
    #[value(alias = "size", alias = "bytes")]
    ByteSize,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Strings => Category::Strings,
            CategoryArg::Numbers => Category::Numbers,
            CategoryArg::Percentage => Category::Percentage,
            CategoryArg::ByteSize => Category::ByteSize,
        }
    }
}
