use crate::error::{Field, Rejection};
use crate::io_adapters::Console;
use crate::package::{MAX_TOTAL_SIZE, PackageMeasurements};
use crate::parse::parse_amount;
use crate::step::Verdict;
use anyhow::Result;

/// Ask for width, height and length in turn and store them together.
///
/// The first answer that is not a number stops the step before the remaining
/// fields are asked for. If the three dimensions add up to more than
/// [`MAX_TOTAL_SIZE`], none of them are stored.
pub(crate) fn collect(console: &mut Console<'_>, package: &mut PackageMeasurements) -> Result<Verdict> {
    let mut values = [0.0; 3];
    for (slot, field) in values.iter_mut().zip([Field::Width, Field::Height, Field::Length]) {
        let answer = console.ask(&field.prompt())?;
        match parse_amount(&answer) {
            Some(value) => *slot = value,
            None => {
                tracing::debug!(%field, input = %answer, "dimension is not a number");
                return Ok(Verdict::Halt(Rejection::InvalidInput(field)));
            }
        }
    }

    let [width, height, length] = values;
    let candidate = PackageMeasurements {
        width,
        height,
        length,
        ..*package
    };
    let total_size = candidate.total_size();
    if total_size > MAX_TOTAL_SIZE {
        tracing::info!(width, height, length, total_size, limit = MAX_TOTAL_SIZE, "package too big");
        return Ok(Verdict::Halt(Rejection::TooBig));
    }

    tracing::debug!(width, height, length, "dimensions accepted");
    *package = candidate;
    Ok(Verdict::Proceed)
}
