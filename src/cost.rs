use crate::io_adapters::Console;
use crate::package::PackageMeasurements;
use crate::step::Verdict;
use anyhow::Result;

/// Quote line for a computed cost, rounded to cents.
pub fn quote_line(cost: f64) -> String {
    format!("Your estimated total for shipping this package is: ${:.2}", cost)
}

/// Report the shipping cost for a fully collected package. Never halts.
pub(crate) fn calculate(console: &mut Console<'_>, package: &mut PackageMeasurements) -> Result<Verdict> {
    let cost = package.shipping_cost();
    tracing::info!(cost, "quote computed");
    console.say(&quote_line(cost))?;
    console.say("Thank you!")?;
    Ok(Verdict::Proceed)
}
