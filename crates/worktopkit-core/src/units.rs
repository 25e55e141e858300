//! Unit conversion utilities
//!
//! Handles the lenient numeric parsing applied to every dimension field and
//! the fixed conversions between the input unit (centimeters) and the priced
//! units (meters, square meters).
//!
//! Parsing never fails: text whose leading portion is not a number yields
//! `0.0`, so a half-typed field prices as an empty one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Square centimeters per square meter.
pub const CM2_PER_M2: f64 = 10_000.0;

/// Measurement unit used by panel fields and derived figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    /// Centimeters (panel and cut-out dimensions)
    Centimeter,
    /// Meters (perimeter, custom perimeter)
    Meter,
    /// Square meters (area)
    SquareMeter,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::Centimeter
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(get_unit_label(*self))
    }
}

impl FromStr for MeasurementUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "m" | "meter" | "meters" => Ok(Self::Meter),
            "m2" | "m²" | "sqm" | "square_meter" => Ok(Self::SquareMeter),
            _ => Err(format!("Unknown measurement unit: {}", s)),
        }
    }
}

/// Get the unit label for the given unit ("cm", "m" or "m²")
pub fn get_unit_label(unit: MeasurementUnit) -> &'static str {
    match unit {
        MeasurementUnit::Centimeter => "cm",
        MeasurementUnit::Meter => "m",
        MeasurementUnit::SquareMeter => "m²",
    }
}

/// Parse raw field text into a number, degrading to `0.0`.
///
/// Leading whitespace is skipped and the longest numeric prefix is taken, so
/// `"12abc"` is `12.0`, `"-5"` is `-5.0` and `"abc"` or `""` is `0.0`.
/// `"Infinity"` (optionally signed) parses as an infinite value.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let prefix = numeric_prefix(trimmed);
    if prefix.is_empty() {
        return parse_infinity(trimmed).unwrap_or(0.0);
    }
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Longest prefix of `s` that forms a decimal literal: optional sign,
/// digits with an optional fraction, and an exponent only when it has digits.
fn numeric_prefix(s: &str) -> &str {
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
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
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

    &s[..end]
}

fn parse_infinity(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    rest.starts_with("Infinity").then_some(sign * f64::INFINITY)
}

/// Convert a length in centimeters to meters
pub fn cm_to_m(value_cm: f64) -> f64 {
    value_cm / CM_PER_M
}

/// Convert an area in square centimeters to square meters
pub fn cm2_to_m2(value_cm2: f64) -> f64 {
    value_cm2 / CM2_PER_M2
}

/// Format a monetary amount for display (two decimals, no rounding upstream)
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format a measurement with two decimals and its unit label, e.g. `"5.20 m"`
pub fn format_measure(value: f64, unit: MeasurementUnit) -> String {
    format!("{:.2} {}", value, get_unit_label(unit))
}

/// Format a parsed dimension the way it is echoed back in labels (`"200 cm"`)
pub fn format_dimension_label(value: f64, unit: MeasurementUnit) -> String {
    format!("{} {}", value, get_unit_label(unit))
}
