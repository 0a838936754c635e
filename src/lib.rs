//! bicon-renderer: SVG icon rendering with composable transforms
//!
//! This crate renders a named glyph as an `<svg>` element description,
//! decorated by independent modifiers: uniform scale, horizontal/vertical
//! mirroring, rotation, positional shift, color variant, relative font size,
//! animation class and stacked sub-icon mode.
//!
//! # Example
//!
//! ```
//! use bicon_renderer::{IconRegistry, IconRenderer, IconRequest};
//!
//! // Populate a registry once at startup
//! let mut registry = IconRegistry::with_builtin();
//! registry.register("my-logo", r#"<path d="M2 2h16v16H2z"/>"#).unwrap();
//!
//! let renderer = IconRenderer::new(&registry);
//! let svg = renderer.render(
//!     &IconRequest::new("my-logo")
//!         .variant("danger")
//!         .rotate(45.0)
//!         .shift(8.0, 16.0),
//! );
//!
//! // Shift wraps the rotation in its own group
//! assert_eq!(svg.select("svg > g").unwrap().attr("transform"), Some("translate(10 -20)"));
//! assert!(svg.has_class("text-danger"));
//!
//! let markup = svg.to_svg();
//! assert!(markup.starts_with("<svg"));
//! ```
//!
//! # Host Properties
//!
//! Hosts that pass component properties as JSON use [`IconProps`], which
//! accepts numbers as strings and degrades malformed values to defaults:
//!
//! ```
//! use bicon_renderer::{IconProps, IconRenderer};
//!
//! let props = IconProps::from_json(r#"{"icon": "unknown", "scale": "oops"}"#).unwrap();
//! let svg = IconRenderer::global().render_props(&props);
//! assert!(svg.has_class("bi-blank"));
//! ```

mod attributes;
mod catalog;
mod element;
mod error;
mod geometry;
mod props;
mod raster;
mod renderer;
mod request;
mod theme;
mod transform;

pub mod registry;

#[cfg(feature = "tsify")]
mod wasm;

pub use attributes::{build_attributes, build_classes, font_size_style, BASE_CLASSES};
pub use catalog::{register_builtin, BUILTIN_GLYPHS};
pub use element::{Element, Node, SVG_NS};
pub use error::{IconError, Result};
pub use geometry::{
    clamp_scale, format_number, parse_rotate, parse_scale, parse_shift, shift_offset,
    signed_scale, RawNumber, GRID_SIZE, PIVOT, SHIFT_UNIT,
};
pub use props::IconProps;
pub use raster::{rasterize, render_svg};
pub use registry::{normalize_name, Glyph, GlyphRenderer, IconRegistry, RendererEntry, BLANK};
pub use renderer::{render_icon, IconRenderer};
pub use request::IconRequest;
pub use theme::Theme;
pub use transform::{Modifiers, TransformPlan};
