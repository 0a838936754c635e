//! Class list and attribute set for the root `<svg>` element.

use indexmap::IndexMap;

use crate::element::SVG_NS;
use crate::geometry::{format_number, GRID_SIZE};

/// Classes every icon carries, in order.
pub const BASE_CLASSES: [&str; 2] = ["b-icon", "bi"];

/// Builds the ordered class list.
///
/// `b-icon bi bi-<name> [text-<variant>] [b-icon-animation-<animation>]`.
pub fn build_classes(icon_name: &str, variant: Option<&str>, animation: Option<&str>) -> Vec<String> {
    let mut classes: Vec<String> = BASE_CLASSES.iter().map(|c| c.to_string()).collect();
    let mut push = |class: String| {
        if !classes.contains(&class) {
            classes.push(class);
        }
    };
    push(format!("bi-{icon_name}"));
    if let Some(variant) = variant {
        push(format!("text-{variant}"));
    }
    if let Some(animation) = animation {
        push(format!("b-icon-animation-{animation}"));
    }
    classes
}

/// Builds the root attributes.
///
/// Stacked icons live inside another icon's viewport, so they drop the
/// standalone sizing and accessibility attributes.
pub fn build_attributes(stacked: bool, font_scale: f64) -> IndexMap<String, String> {
    let grid = format_number(GRID_SIZE);
    let mut attrs = IndexMap::new();
    attrs.insert("viewBox".to_string(), format!("0 0 {grid} {grid}"));
    if !stacked {
        attrs.insert("width".to_string(), "1em".to_string());
        attrs.insert("height".to_string(), "1em".to_string());
        attrs.insert("xmlns".to_string(), SVG_NS.to_string());
    }
    attrs.insert("fill".to_string(), "currentColor".to_string());
    attrs.insert("focusable".to_string(), "false".to_string());
    if !stacked {
        attrs.insert("role".to_string(), "img".to_string());
        attrs.insert("alt".to_string(), "icon".to_string());
    }
    if let Some(style) = font_size_style(font_scale) {
        attrs.insert("style".to_string(), style);
    }
    attrs
}

/// `font-size: N%` for a non-unit font scale.
pub fn font_size_style(font_scale: f64) -> Option<String> {
    (font_scale != 1.0).then(|| format!("font-size: {}%", format_number(font_scale * 100.0)))
}
