use crate::error::{Field, Rejection};
use crate::io_adapters::Console;
use crate::package::{MAX_WEIGHT, PackageMeasurements};
use crate::parse::parse_amount;
use crate::step::Verdict;
use anyhow::Result;

/// Ask for the package weight and store it if it is within [`MAX_WEIGHT`].
///
/// On rejection the record is left untouched.
pub(crate) fn collect(console: &mut Console<'_>, package: &mut PackageMeasurements) -> Result<Verdict> {
    let answer = console.ask(&Field::Weight.prompt())?;
    let Some(weight) = parse_amount(&answer) else {
        tracing::debug!(input = %answer, "weight is not a number");
        return Ok(Verdict::Halt(Rejection::InvalidInput(Field::Weight)));
    };

    if weight > MAX_WEIGHT {
        tracing::info!(weight, limit = MAX_WEIGHT, "package too heavy");
        return Ok(Verdict::Halt(Rejection::TooHeavy));
    }

    tracing::debug!(weight, "weight accepted");
    package.weight = weight;
    Ok(Verdict::Proceed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::BufReadInput;
    use std::io::Cursor;

    fn run(input: &str, package: &mut PackageMeasurements) -> (Verdict, String) {
        let mut input = BufReadInput::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        let verdict = {
            let mut console = Console::new(&mut input, &mut out);
            collect(&mut console, package).unwrap()
        };
        (verdict, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_weight_within_limit_is_stored() {
        for (text, expected) in [("0", 0.0), ("10", 10.0), ("12.5", 12.5), ("49.99", 49.99)] {
            let mut package = PackageMeasurements::new();
            let (verdict, out) = run(&format!("{text}\n"), &mut package);

            assert_eq!(verdict, Verdict::Proceed);
            assert_eq!(package.weight, expected);
            assert_eq!(out, "Please enter the package weight:\n");
        }
    }

    #[test]
    fn test_weight_at_limit_is_accepted() {
        let mut package = PackageMeasurements::new();
        let (verdict, _) = run("50\n", &mut package);
        assert_eq!(verdict, Verdict::Proceed);
        assert_eq!(package.weight, 50.0);
    }

    #[test]
    fn test_heavy_package_is_rejected_and_not_stored() {
        for text in ["50.01", "60", "1,000"] {
            let mut package = PackageMeasurements::new();
            let (verdict, _) = run(&format!("{text}\n"), &mut package);

            assert_eq!(verdict, Verdict::Halt(Rejection::TooHeavy));
            assert_eq!(package.weight, 0.0);
        }
    }

    #[test]
    fn test_non_numeric_weight_is_invalid() {
        for text in ["abc\n", "\n", ""] {
            let mut package = PackageMeasurements::new();
            let (verdict, out) = run(text, &mut package);

            assert_eq!(verdict, Verdict::Halt(Rejection::InvalidInput(Field::Weight)));
            assert_eq!(package.weight, 0.0);
            assert_eq!(out, "Please enter the package weight:\n");
        }
    }

    #[test]
    fn test_negative_weight_is_only_bounded_above() {
        let mut package = PackageMeasurements::new();
        let (verdict, _) = run("-5\n", &mut package);

        assert_eq!(verdict, Verdict::Proceed);
        assert_eq!(package.weight, -5.0);
    }

    #[test]
    fn test_only_weight_is_touched() {
        let mut package = PackageMeasurements {
            weight: 0.0,
            width: 1.0,
            height: 2.0,
            length: 3.0,
        };
        run("7\n", &mut package);
        assert_eq!(
            package,
            PackageMeasurements {
                weight: 7.0,
                width: 1.0,
                height: 2.0,
                length: 3.0,
            }
        );
    }
}
