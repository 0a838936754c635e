//! Numeric helpers for icon modifiers.
//!
//! Every parser here is total: malformed, missing or non-finite input maps
//! to the modifier's identity value instead of an error. Numbers are written
//! back out the way a JavaScript engine prints them so transform strings are
//! stable (`1.5`, never `1.50` or `1.5000000`).

use serde::{Deserialize, Deserializer, Serialize};

/// Side length of the glyph design grid.
pub const GRID_SIZE: f64 = 20.0;

/// Rotation and scaling pivot, the center of the design grid.
pub const PIVOT: f64 = GRID_SIZE / 2.0;

/// Grid units per shift unit. One shift unit is 1/16 em and the grid spans 1 em.
pub const SHIFT_UNIT: f64 = GRID_SIZE / 16.0;

// ============================================================================
// RawNumber
// ============================================================================

/// A numeric property as supplied by a host, before coercion.
///
/// Hosts frequently pass numbers as strings (`scale="1.5"`), so both forms
/// are accepted. Anything else deserializes to [`RawNumber::Invalid`] rather
/// than failing the surrounding document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Invalid,
}

impl RawNumber {
    /// Coerces to a finite float, if there is one to be had.
    ///
    /// Text is read like `parseFloat`: leading whitespace is skipped and the
    /// longest numeric prefix is used, so `"45deg"` yields `45`.
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v).filter(|v| v.is_finite()),
            Self::Text(s) => parse_float_prefix(s),
            Self::Invalid => None,
        }
    }
}

impl From<f64> for RawNumber {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<'de> Deserialize<'de> for RawNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Invalid, Self::Number),
            serde_json::Value::String(s) => Self::Text(s),
            _ => Self::Invalid,
        })
    }
}

fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
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
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// Modifier Parsers
// ============================================================================

/// Parses a positive scale factor. Absent, malformed or non-positive input yields `1`.
pub fn parse_scale(raw: Option<&RawNumber>) -> f64 {
    clamp_scale(raw.and_then(RawNumber::to_float).unwrap_or(1.0))
}

/// Forces a scale factor into the positive range, using `1` otherwise.
pub fn clamp_scale(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Parses a rotation in degrees. Any finite angle is kept as given.
pub fn parse_rotate(raw: Option<&RawNumber>) -> f64 {
    raw.and_then(RawNumber::to_float).unwrap_or(0.0)
}

/// Parses a shift distance in shift units (1/16 em).
pub fn parse_shift(raw: Option<&RawNumber>) -> f64 {
    raw.and_then(RawNumber::to_float).unwrap_or(0.0)
}

/// Combines a scale magnitude with the mirror flags.
pub fn signed_scale(magnitude: f64, flip_h: bool, flip_v: bool) -> (f64, f64) {
    let sx = if flip_h { -magnitude } else { magnitude };
    let sy = if flip_v { -magnitude } else { magnitude };
    (sx, sy)
}

/// Converts shift units to a grid-space offset.
///
/// The vertical axis is inverted: a positive `shift_v` moves the glyph up.
pub fn shift_offset(shift_h: f64, shift_v: f64) -> (f64, f64) {
    (shift_h * SHIFT_UNIT, -shift_v * SHIFT_UNIT)
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a number the way JavaScript's `Number#toString` does.
///
/// Integral values have no fractional part, `-0` prints as `0`, and
/// non-finite values print as `0`.
pub fn format_number(value: f64) -> String {
    let mut buf = ryu_js::Buffer::new();
    format_number_with(value, &mut buf).to_string()
}

pub(crate) fn format_number_with(value: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !value.is_finite() {
        return "0";
    }
    let value = if value == 0.0 { 0.0 } else { value };
    buf.format_finite(value)
}
