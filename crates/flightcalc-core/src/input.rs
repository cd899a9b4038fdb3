//! Numeric Input Handling
//!
//! Lenient parsing for text typed into numeric fields, and the clamping
//! applied when a field loses focus.
//!
//! Parsing takes the longest numeric prefix of the text (`"12.5 W"` is 12.5).
//! Text with no numeric prefix, including the empty string, becomes 0.
//! Negative values are kept while typing and only clamped on commit.

use serde::{Deserialize, Serialize};

use crate::power::LightingLevel;

/// Numeric input fields owned by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Airframe mass, in the current display unit
    BaseMass,
    /// Auxiliary electronics draw (W)
    AuxPower,
    /// Manual battery capacity (Wh)
    BatteryCapacity,
    /// Reserved battery share (%)
    BatteryMargin,
}

impl NumericField {
    /// All fields in tab order
    pub const ALL: [NumericField; 4] = [
        NumericField::BaseMass,
        NumericField::AuxPower,
        NumericField::BatteryCapacity,
        NumericField::BatteryMargin,
    ];

    /// Field reached by pressing Enter, wrapping back to the first
    pub fn next(self) -> NumericField {
        match self {
            NumericField::BaseMass => NumericField::AuxPower,
            NumericField::AuxPower => NumericField::BatteryCapacity,
            NumericField::BatteryCapacity => NumericField::BatteryMargin,
            NumericField::BatteryMargin => NumericField::BaseMass,
        }
    }
}

/// Parse the longest leading decimal number in `text`
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digits are found.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse a field value, substituting 0 for unparseable text
pub fn parse_numeric(text: &str) -> f64 {
    match parse_leading_float(text) {
        Some(v) if v.is_finite() => v,
        _ => {
            tracing::trace!("Non-numeric input {:?} treated as 0", text);
            0.0
        }
    }
}

/// Parse the lighting slider position
///
/// Fractional positions are truncated; unparseable text is off.
pub fn parse_lighting(text: &str) -> LightingLevel {
    let ordinal = parse_leading_float(text)
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0);
    LightingLevel::from_ordinal(ordinal)
}

/// Clamp applied when a field loses focus
pub fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}
