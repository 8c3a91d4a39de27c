use std::fmt;
use thiserror::Error;

/// A single measurement the user is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Width,
    Height,
    Length,
}

impl Field {
    /// Lowercase name used in prompts and messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
        }
    }

    /// Prompt line shown before reading this field.
    pub fn prompt(self) -> String {
        format!("Please enter the package {}:", self.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reason a collection step refused the user's input and halted the quote.
///
/// The `Display` text is the exact line shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Input was not a number.
    #[error("Invalid {0} input.")]
    InvalidInput(Field),

    #[error("Package too heavy to be shipped via Package Express. Have a good day.")]
    TooHeavy,

    #[error("Package too big to be shipped via Package Express.")]
    TooBig,
}
