//! Check command implementation.

use crate::cli::CheckArgs;
use crate::commands::utils::read_sample;
use crate::error::{CliError, Result};
use crate::ui;
use sortwise_core::{classify, Category, Direction, OrderChecker, UnitPolicy};

/// Checks the sample's order, printing `true` or `false` on stdout.
///
/// # Errors
///
/// Returns `NotOrdered` when the verdict is false, and order-check errors
/// for samples that cannot be compared.
pub async fn execute(args: CheckArgs) -> Result<()> {
    let sample = read_sample(args.values, args.json.as_deref())?;
    let direction = Direction::from(args.direction);

    let units = if args.strict_units {
        UnitPolicy::Strict
    } else {
        UnitPolicy::Lenient
    };
    let checker = OrderChecker::new().with_unit_policy(units);

    let (category, ordered) = match args.category {
        Some(declared) => {
            let category = Category::from(declared);
            (category, checker.is_ordered_as(&sample, category, direction)?)
        }
        None => (classify(&sample), checker.is_ordered(&sample, direction)?),
    };

    println!("{ordered}");
    if ordered {
        ui::success(&format!("{category} sample is in {direction} order"));
        Ok(())
    } else {
        Err(CliError::NotOrdered {
            category,
            direction,
        })
    }
}
