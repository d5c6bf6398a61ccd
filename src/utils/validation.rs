/// Parse a raw text-field value as a finite number strictly greater than zero.
///
/// Anything else (empty, non-numeric, zero, negative, NaN/inf) is `None`; the
/// calculators turn that into their "enter ... to calculate" prompt rather
/// than an error.
pub fn parse_positive_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Trim a field value and return it only when something non-blank remains.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
