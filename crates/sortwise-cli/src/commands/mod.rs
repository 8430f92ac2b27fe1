//! Command implementations.
//!
//! - [`classify`] - print the category of a sample
//! - [`check`] - check a sample's order
//! - [`run`] - drive the browser through configured scenarios

pub mod check;
pub mod classify;
pub mod run;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use classify::execute as classify_execute;
pub use run::execute as run_execute;
