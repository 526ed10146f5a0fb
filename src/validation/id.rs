//! Validation of user identifiers taken from request paths.
//!
//! An identifier is accepted when its numeric value is a whole number, so
//! `"2"`, `"-1"`, `"2.0"` and `"1e3"` are all valid while `"1.5"` and `"abc"`
//! are not.

/// Returns true if `raw` coerces to a number that is a mathematical integer.
pub fn is_valid_id(raw: &str) -> bool {
    match numeric_value(raw) {
        Some(value) => value.is_finite() && value.fract() == 0.0,
        None => false,
    }
}

/// Reads the integer handed to the store from an identifier.
///
/// Leading whitespace and an optional sign are skipped, then either a `0x`
/// hexadecimal run or the leading decimal digits are read; anything after
/// them is ignored, so `"2.0"` is 2 and `"1e3"` is 1. Returns `None` when
/// no digits are found or the value does not fit in an `i64`.
///
/// This does not validate: check [`is_valid_id`] first.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut magnitude: i128 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        magnitude = magnitude
            .checked_mul(i128::from(radix))?
            .checked_add(i128::from(d))?;
        seen = true;
    }

    if !seen {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Coerce a string to a number the way numeric string literals are read:
/// surrounding whitespace is ignored, blank input is zero, and decimal,
/// hexadecimal, octal and binary notations are understood.
fn numeric_value(raw: &str) -> Option<f64> {
    let s = raw.trim();

    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = radix_value(s) {
        return value;
    }

    // f64's parser also accepts "inf" and "NaN" spellings, keep it to literals
    let literal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !literal {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Handles `0x`, `0o` and `0b` prefixes. The outer `None` means "not a radix
/// literal", the inner one "prefixed but malformed".
fn radix_value(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }

    Some(Some(value))
}
