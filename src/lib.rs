//! Package Express: an interactive shipping quote for a single package.
//!
//! A quote is a fixed [`Pipeline`] of steps: collect the weight, collect the
//! three dimensions, then report the cost. Each collection step checks the
//! answers against a policy limit and can halt the pipeline with a
//! [`Rejection`], which is shown to the user in place of the remaining prompts.
//!
//! Input and output go through [`io_adapters::Console`], so a session can run
//! against a terminal (via `rustyline`) or against in-memory buffers.

mod cost;
mod dimensions;
pub mod error;
pub mod io_adapters;
pub mod logger;
pub mod package;
pub mod parse;
mod pipeline;
mod step;
mod weight;

pub use cost::quote_line;
pub use error::{Field, Rejection};
pub use package::PackageMeasurements;
pub use pipeline::{Outcome, Pipeline, WELCOME, report_error, run_session};
pub use step::{Step, Verdict};
