//! Variant colors used when an icon is rasterized.
//!
//! In a browser `currentColor` comes from the `text-<variant>` class. Raster
//! output has no stylesheet, so the theme supplies the concrete color.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use palette::Srgb;

use crate::error::{IconError, Result};

const BOOTSTRAP_VARIANTS: &[(&str, &str)] = &[
    ("primary", "#007bff"),
    ("secondary", "#6c757d"),
    ("success", "#28a745"),
    ("info", "#17a2b8"),
    ("warning", "#ffc107"),
    ("danger", "#dc3545"),
    ("light", "#f8f9fa"),
    ("dark", "#343a40"),
];

/// Variant name to color table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: HashMap<String, Srgb<u8>>,
    default: Srgb<u8>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// An empty theme; every variant renders black.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            default: Srgb::new(0, 0, 0),
        }
    }

    /// The stock Bootstrap 4 theme colors.
    pub fn bootstrap() -> &'static Theme {
        static BOOTSTRAP: OnceLock<Theme> = OnceLock::new();
        BOOTSTRAP.get_or_init(|| {
            let mut theme = Theme::new();
            for (name, hex) in BOOTSTRAP_VARIANTS {
                if let Some(color) = parse_hex(hex) {
                    theme.colors.insert(name.to_string(), color);
                }
            }
            theme
        })
    }

    /// Adds or replaces a variant color from a `#rrggbb` string.
    pub fn with_hex(mut self, variant: &str, hex: &str) -> Result<Self> {
        let color = parse_hex(hex).ok_or_else(|| IconError::InvalidColor(hex.to_string()))?;
        self.colors.insert(variant.to_string(), color);
        Ok(self)
    }

    pub fn with_color(mut self, variant: &str, color: Srgb<u8>) -> Self {
        self.colors.insert(variant.to_string(), color);
        self
    }

    /// Sets the color used when no variant, or an unknown one, is given.
    pub fn with_default(mut self, color: Srgb<u8>) -> Self {
        self.default = color;
        self
    }

    pub fn color_for(&self, variant: Option<&str>) -> Srgb<u8> {
        variant
            .and_then(|v| self.colors.get(v))
            .copied()
            .unwrap_or(self.default)
    }
}

/// Parses `#rrggbb` or `rrggbb`.
pub fn parse_hex(hex: &str) -> Option<Srgb<u8>> {
    Srgb::<u8>::from_str(hex.trim()).ok()
}

/// Formats a color as `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
