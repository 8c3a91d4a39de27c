use crate::error::Rejection;
use crate::io_adapters::{Console, LineInput};
use crate::package::PackageMeasurements;
use crate::step::{Step, Verdict};
use anyhow::Result;
use std::io::Write;

/// Banner shown once at the start of every session.
pub const WELCOME: &str = "Welcome to Package Express. Please follow the instructions below.";

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every step ran and a cost was reported.
    Quoted {
        package: PackageMeasurements,
        cost: f64,
    },
    /// `step` rejected the user's input; no later step ran.
    Halted { step: Step, rejection: Rejection },
}

/// Runs an ordered list of steps, stopping at the first one that halts.
///
/// Example
/// ```
/// use package_express::io_adapters::{BufReadInput, Console};
/// use package_express::{Outcome, Pipeline};
///
/// let mut input = BufReadInput::new(std::io::Cursor::new("10\n5\n5\n5\n"));
/// let mut out = Vec::new();
/// let mut console = Console::new(&mut input, &mut out);
/// let outcome = Pipeline::default().run(&mut console).unwrap();
/// assert!(matches!(outcome, Outcome::Quoted { cost, .. } if cost == 12.5));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Create a pipeline that runs `steps` in the given order.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Steps in the order they run.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step against a fresh [`PackageMeasurements`].
    pub fn run(&self, console: &mut Console<'_>) -> Result<Outcome> {
        let mut package = PackageMeasurements::new();
        self.run_with(console, &mut package)
    }

    /// Run every step against `package`.
    ///
    /// A rejection is written to the console as its own line and ends the run.
    /// Errors only come from the console.
    pub fn run_with(
        &self,
        console: &mut Console<'_>,
        package: &mut PackageMeasurements,
    ) -> Result<Outcome> {
        for &step in &self.steps {
            tracing::debug!(%step, "running step");
            match step.execute(console, package)? {
                Verdict::Proceed => {}
                Verdict::Halt(rejection) => {
                    tracing::info!(%step, %rejection, "quote halted");
                    console.say(&rejection.to_string())?;
                    return Ok(Outcome::Halted { step, rejection });
                }
            }
        }
        Ok(Outcome::Quoted {
            package: *package,
            cost: package.shipping_cost(),
        })
    }
}

impl Default for Pipeline {
    /// Weight, then dimensions, then cost.
    fn default() -> Self {
        Self::new(Step::ALL.to_vec())
    }
}

/// Greet the user and run a full quote session over the given streams.
pub fn run_session(input: &mut dyn LineInput, output: &mut dyn Write) -> Result<Outcome> {
    let mut console = Console::new(input, output);
    console.say(WELCOME)?;
    Pipeline::default().run(&mut console)
}

/// Report an error that ended a session early as the last transcript line.
///
/// A failure to write the report is logged and otherwise ignored, so a closed
/// output never turns into a crash.
pub fn report_error(output: &mut dyn Write, err: &anyhow::Error) {
    tracing::error!("session failed: {:#}", err);
    if let Err(write_err) = writeln!(output, "An error occurred: {}", err).and_then(|()| output.flush()) {
        tracing::error!("could not report session failure: {}", write_err);
    }
}
