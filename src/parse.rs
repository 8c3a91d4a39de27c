use regex::Regex;
use std::sync::LazyLock;

/// Decimal number with optional sign, `,` group separators in the integral
/// part, fractional part and exponent. Requires at least one digit.
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d[\d,]*(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("amount pattern is valid")
});

/// Parse a line of user input as a real number.
///
/// Surrounding whitespace is ignored and thousands separators are accepted, so
/// `" 1,250.5 "` parses as `1250.5`. Returns `None` for anything that is not a
/// plain decimal number, including `NaN` and `inf`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if !AMOUNT.is_match(text) {
        return None;
    }
    text.replace(',', "").parse().ok()
}
