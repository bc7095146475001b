//! Conversion of raw argument text into typed values.
//!
//! Numeric text is read the way C's `strtod`/`strtol(.., 0)` read it: leading
//! whitespace is skipped, the longest numeric prefix is converted and the
//! rest is ignored. Integers accept `0x` (hex) and leading-`0` (octal)
//! prefixes and saturate at the `i32` bounds.

use tracing::warn;

use crate::config::CoercionMode;
use crate::error::{ParseError, Result};
use crate::types::{Value, ValueKind};

/// Sentinel stored when double/float text has no numeric prefix.
pub const FLOAT_SENTINEL: f64 = f64::NAN;

/// Sentinel stored when int text has no numeric prefix.
pub const INT_SENTINEL: i32 = i32::MIN;

/// Converts `text` for option `option` into a value of `kind`.
///
/// Absent text (a flag, or an optional argument left out) yields the kind's
/// presence value: `1`, `1.0` or an empty string.
pub(crate) fn coerce(
    option: char,
    kind: ValueKind,
    text: Option<&str>,
    mode: CoercionMode,
) -> Result<Value> {
    let Some(text) = text else {
        return Ok(presence_value(kind));
    };

    let converted = match kind {
        ValueKind::String => return Ok(Value::String(text.to_string())),
        ValueKind::Double => float_prefix(text)
            .and_then(|(start, end)| Some((text[start..end].parse::<f64>().ok()?, end)))
            .map(|(v, end)| (Value::Double(v), end)),
        ValueKind::Float => float_prefix(text)
            .and_then(|(start, end)| Some((text[start..end].parse::<f32>().ok()?, end)))
            .map(|(v, end)| (Value::Float(v), end)),
        ValueKind::Int => int_prefix(text).map(|(v, end)| (Value::Int(v), end)),
    };

    match (converted, mode) {
        (Some((value, end)), CoercionMode::Lenient) => {
            if end < text.trim_end().len() {
                warn!(
                    option = %option,
                    text,
                    ignored = &text[end..],
                    "Ignoring trailing text after number"
                );
            }
            Ok(value)
        }
        (Some((value, end)), CoercionMode::Strict) if end == text.trim_end().len() => Ok(value),
        (None, CoercionMode::Lenient) => {
            warn!(
                option = %option,
                kind = %kind,
                text,
                "Unconvertible argument, storing sentinel"
            );
            Ok(sentinel(kind))
        }
        _ => Err(ParseError::Coercion {
            option,
            kind,
            text: text.to_string(),
        }),
    }
}

fn presence_value(kind: ValueKind) -> Value {
    match kind {
        ValueKind::String => Value::String(String::new()),
        ValueKind::Double => Value::Double(1.0),
        ValueKind::Float => Value::Float(1.0),
        ValueKind::Int => Value::Int(1),
    }
}

fn sentinel(kind: ValueKind) -> Value {
    match kind {
        ValueKind::String => Value::String(String::new()),
        ValueKind::Double => Value::Double(FLOAT_SENTINEL),
        ValueKind::Float => Value::Float(FLOAT_SENTINEL as f32),
        ValueKind::Int => Value::Int(INT_SENTINEL),
    }
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

fn count_digits(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|&&b| (b as char).is_digit(radix))
        .count()
}

/// Byte range of the longest floating-point literal at the start of `text`
/// (after whitespace), or `None` when no digits can be consumed.
fn float_prefix(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(bytes);
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return Some((start, i + word.len()));
        }
    }

    let int_digits = count_digits(&bytes[i..], 10);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..], 10);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..], 10);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    Some((start, i))
}

/// Longest integer literal at the start of `text`, honoring `0x` and `0`
/// base prefixes. Returns the saturated value and the end offset.
fn int_prefix(text: &str) -> Option<(i32, usize)> {
    let bytes = text.as_bytes();
    let mut i = skip_whitespace(bytes);
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let radix = match (bytes.get(i), bytes.get(i + 1), bytes.get(i + 2)) {
        (Some(b'0'), Some(b'x' | b'X'), Some(h)) if h.is_ascii_hexdigit() => {
            i += 2;
            16
        }
        (Some(b'0'), _, _) => 8,
        _ => 10,
    };

    let digits = count_digits(&bytes[i..], radix);
    if digits == 0 {
        return None;
    }

    let magnitude = bytes[i..i + digits].iter().fold(0i64, |acc, &b| {
        let digit = (b as char).to_digit(radix).unwrap_or(0) as i64;
        acc.saturating_mul(radix as i64).saturating_add(digit)
    });
    let signed = if negative { -magnitude } else { magnitude };
    let clamped = signed.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    Some((clamped, i + digits))
}
