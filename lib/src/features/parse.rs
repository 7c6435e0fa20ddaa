//! Lenient parsers for the free-text dataset columns.
//!
//! Both parsers return `None` instead of failing: a value that cannot be read
//! becomes a missing entry and is median-filled by the imputer later on.

/// Parse a `total_sqft` cell.
///
/// A hyphenated range (`"1200-1500"`) yields the midpoint of its first two
/// endpoints; every endpoint must be a number. Anything else is parsed as a
/// single float.
pub fn parse_total_sqft(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.contains('-') {
        let endpoints = text
            .split('-')
            .map(parse_float)
            .collect::<Option<Vec<f64>>>()?;
        return match endpoints.as_slice() {
            [low, high, ..] => Some((low + high) / 2.0),
            _ => None,
        };
    }
    parse_float(text)
}

/// Extract the bedroom count from a `size` cell such as `"2 BHK"` or
/// `"4 Bedroom"`: the first contiguous run of ASCII digits.
pub fn extract_bhk(size: &str) -> Option<f64> {
    let start = size.find(|c: char| c.is_ascii_digit())?;
    let digits = &size[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
