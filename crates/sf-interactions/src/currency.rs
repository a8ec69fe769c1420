//! Rupiah amounts as the checkout summary shows them.
//!
//! Grouping follows the `id-ID` locale: `.` between thousands, `,` before
//! decimals, at most three fraction digits.

use serde_json::Value;

/// Numeric reading of a JSON value, the way a browser's `Number()` reads it.
/// `NaN` when the value has no numeric meaning.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// `id-ID` grouping of a finite number.
pub fn group_id_locale(amount: f64) -> String {
    let scaled = (amount.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if amount < 0.0 && scaled != 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if fraction != 0 {
        let frac = format!("{fraction:03}");
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Non-numeric and non-finite amounts render as zero.
pub fn format_currency(prefix: &str, value: &Value) -> String {
    let number = to_number(value);
    if !number.is_finite() {
        return format!("{prefix}0");
    }
    format!("{prefix}{}", group_id_locale(number))
}
