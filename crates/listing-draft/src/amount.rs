//! Decimal amount parsing
//!
//! Prices stay as the strings the user typed. Anything that does not parse
//! as a finite number counts as "not positive"; callers never see an error.

/// Parse a user-entered amount
///
/// Surrounding whitespace is ignored. Returns `None` for blank input,
/// malformed numbers, `NaN` and infinities.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check that an amount is present and strictly greater than zero
#[inline]
#[must_use]
pub fn is_positive_amount(raw: &str) -> bool {
    parse_amount(raw).is_some_and(|v| v > 0.0)
}
