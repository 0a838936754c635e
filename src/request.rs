//! Normalized render input.

use crate::geometry::clamp_scale;

/// Fully resolved input to a single render.
///
/// Numeric fields always hold a usable value. The builder methods pass
/// their input through the same coercion as [`crate::IconProps::resolve`],
/// so `IconRequest::new("x").scale(f64::NAN)` renders at scale `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRequest {
    /// Requested icon name. Empty means "no icon".
    pub name: String,
    pub variant: Option<String>,
    pub scale: f64,
    /// Degrees, clockwise.
    pub rotate: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Shift units (1/16 em), positive is right.
    pub shift_h: f64,
    /// Shift units (1/16 em), positive is up.
    pub shift_v: f64,
    pub font_scale: f64,
    pub animation: Option<String>,
    pub stacked: bool,
}

impl Default for IconRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            variant: None,
            scale: 1.0,
            rotate: 0.0,
            flip_h: false,
            flip_v: false,
            shift_h: 0.0,
            shift_v: 0.0,
            font_scale: 1.0,
            animation: None,
            stacked: false,
        }
    }
}

impl IconRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the color variant. Empty strings clear it.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = non_empty(variant.into());
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = clamp_scale(scale);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = finite_or_zero(degrees);
        self
    }

    pub fn flip_h(mut self, flip: bool) -> Self {
        self.flip_h = flip;
        self
    }

    pub fn flip_v(mut self, flip: bool) -> Self {
        self.flip_v = flip;
        self
    }

    pub fn shift(mut self, h: f64, v: f64) -> Self {
        self.shift_h = finite_or_zero(h);
        self.shift_v = finite_or_zero(v);
        self
    }

    pub fn font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = clamp_scale(font_scale);
        self
    }

    /// Sets the animation name. Empty strings clear it.
    pub fn animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = non_empty(animation.into());
        self
    }

    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
