//! Raster output using resvg/usvg.
//!
//! Rendered icons are serialized back to markup, parsed by usvg and drawn
//! into a tiny-skia pixmap. `currentColor` is pinned through a `color`
//! attribute on the root since there is no stylesheet to supply one.

use image::{Rgba, RgbaImage};
use palette::Srgb;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::element::{Element, SVG_NS};
use crate::error::{IconError, Result};
use crate::theme::to_hex;

/// Rasterizes a rendered icon so its larger side is `size` pixels.
pub fn rasterize(icon: &Element, size: u32, color: Srgb<u8>) -> Result<RgbaImage> {
    let mut root = icon.clone();
    // Stacked icons omit the namespace, which usvg requires.
    root.attrs
        .entry("xmlns".to_string())
        .or_insert_with(|| SVG_NS.to_string());
    root.attrs.insert("color".to_string(), to_hex(color));
    // The pixel size comes from `size`; let the viewBox define the canvas.
    for sized in ["width", "height", "style"] {
        root.attrs.shift_remove(sized);
    }

    render_svg(&root.to_svg(), size)
}

/// Renders SVG markup to an RGBA image, preserving aspect ratio.
pub fn render_svg(svg_data: &str, size: u32) -> Result<RgbaImage> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts).map_err(|e| IconError::Svg(e.to_string()))?;

    let svg_size = tree.size();
    let scale = (size as f32) / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).round() as u32;
    let height = (svg_size.height() * scale).round() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(IconError::Raster { width, height })?;
    let transform = Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts tiny-skia's premultiplied pixels to straight alpha.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    img
}
