use crate::error::Rejection;
use crate::io_adapters::Console;
use crate::package::PackageMeasurements;
use anyhow::Result;
use std::fmt;

/// Result of running a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The step succeeded; the pipeline moves on.
    Proceed,
    /// The step refused the input; the pipeline stops here.
    Halt(Rejection),
}

/// One unit of the quote pipeline.
///
/// The set of steps is fixed. Each one reads and writes through a [`Console`]
/// and records what it collected into the shared [`PackageMeasurements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CollectWeight,
    CollectDimensions,
    CalculateCost,
}

impl Step {
    /// Steps of a full quote, in the order they run.
    pub const ALL: [Step; 3] = [Step::CollectWeight, Step::CollectDimensions, Step::CalculateCost];

    pub fn name(self) -> &'static str {
        match self {
            Step::CollectWeight => "collect-weight",
            Step::CollectDimensions => "collect-dimensions",
            Step::CalculateCost => "calculate-cost",
        }
    }

    /// Run the step.
    ///
    /// Rejected input is reported as [`Verdict::Halt`], not as an error. Errors
    /// are reserved for failures of the console itself.
    pub fn execute(
        self,
        console: &mut Console<'_>,
        package: &mut PackageMeasurements,
    ) -> Result<Verdict> {
        match self {
            Step::CollectWeight => crate::weight::collect(console, package),
            Step::CollectDimensions => crate::dimensions::collect(console, package),
            Step::CalculateCost => crate::cost::calculate(console, package),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
