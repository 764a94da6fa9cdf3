use crate::size::{CardSize, determine_precision};
use crate::vars::CardValue;

use super::locale::NumberLocale;

/// Fraction digits used when no precision is requested.
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;
const MAX_FRACTION_DIGITS: u32 = 100;

const MAGNITUDES: [(f64, &str); 4] =
    [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format a value with a magnitude suffix.
///
/// Thresholds are strict: `1000` stays `1,000`, `1001` becomes `1K`.
/// `precision` fixes the fraction digits of the scaled value; `None` uses
/// the locale defaults (up to three digits, trailing zeros dropped).
pub fn format_magnitude(value: f64, precision: Option<u32>, locale: &str) -> String {
    for (threshold, suffix) in MAGNITUDES {
        if value > threshold {
            return format!("{}{suffix}", format_plain(value / threshold, precision, locale));
        }
    }
    format_plain(value, precision, locale)
}

/// Format a value with locale grouping and decimals, without scaling.
pub fn format_plain(value: f64, precision: Option<u32>, locale: &str) -> String {
    let symbols = NumberLocale::lookup(locale);

    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { symbols.minus } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (min_fraction, max_fraction) = match precision {
        Some(p) => {
            let p = p.min(MAX_FRACTION_DIGITS) as usize;
            (p, p)
        }
        None => (0, DEFAULT_MAX_FRACTION_DIGITS),
    };

    let (integer, mut fraction) = round_half_away(value.abs(), max_fraction);
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = String::from(sign);
    out.push_str(&symbols.group_digits(&integer));
    if !fraction.is_empty() {
        out.push_str(symbols.decimal);
        out.push_str(&fraction);
    }
    out
}

/// Render a chart tooltip or axis value for a card of `size`.
///
/// Anything that is not a number renders as `--`.
pub fn format_chart_value(
    value: &CardValue,
    size: CardSize,
    unit: Option<&str>,
    locale: &str,
) -> String {
    let rendered = match value {
        CardValue::Number(n) => {
            let candidate = if n.abs() > 1.0 { 1 } else { 3 };
            format_plain(*n, determine_precision(size, *n, Some(candidate)), locale)
        }
        _ => "--".to_string(),
    };
    match unit {
        Some(unit) => format!("{rendered} {unit}"),
        None => rendered,
    }
}

/// Round a non-negative finite value to `digits` decimals, ties away from zero.
///
/// Rounds the shortest decimal that reads back as `value` (so `1.005` is a
/// tie), not its exact binary expansion. Returns the integer and fraction
/// digits separately.
fn round_half_away(value: f64, digits: usize) -> (String, String) {
    let (significand, int_len) = shortest_digits(value);

    let mut kept: Vec<u8> = significand.iter().copied().take(int_len + digits).collect();
    kept.resize(int_len + digits, b'0');
    let mut int_len = int_len;

    if significand.get(int_len + digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let fraction = kept.split_off(int_len);
    (
        String::from_utf8(kept).unwrap_or_default(),
        String::from_utf8(fraction).unwrap_or_default(),
    )
}

/// Shortest round-trip digits of `value` laid out positionally, with the
/// number of integer digits (at least one).
fn shortest_digits(value: f64) -> (Vec<u8>, usize) {
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mantissa: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let point = exponent + 1;
    if point <= 0 {
        let mut digits = vec![b'0'; 1 + point.unsigned_abs() as usize];
        digits.extend(mantissa);
        (digits, 1)
    } else {
        let int_len = point as usize;
        let mut digits = mantissa;
        if digits.len() < int_len {
            digits.resize(int_len, b'0');
        }
        (digits, int_len)
    }
}
