//! Numeric text helpers.
//!
//! The expression language keeps numbers in their lexical form all the way
//! through the token pipeline, so parsing and rendering live here where
//! both the language and runtime crates can reach them.

/// Parses a numeric literal, accepting an optional leading sign and
/// `0x`-prefixed hexadecimal integers alongside ordinary decimals.
///
/// Returns `None` for anything that is not a finite number.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if rest.is_empty() {
        return None;
    }

    let value = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok().map(|n| n as f64)?
    } else {
        rest.parse::<f64>().ok()?
    };

    let signed = sign * value;
    signed.is_finite().then_some(signed)
}

/// Renders a double at maximum precision.
///
/// Uses the shortest representation that parses back to the identical
/// bit pattern, so constant substitution loses no representable bits.
#[must_use]
pub fn format_precise(value: f64) -> String {
    format!("{value}")
}
