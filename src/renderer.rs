//! Icon rendering: resolve, compose transforms, build attributes, assemble.

use image::RgbaImage;

use crate::attributes::{build_attributes, build_classes};
use crate::element::Element;
use crate::error::Result;
use crate::props::IconProps;
use crate::raster;
use crate::registry::{self, IconRegistry};
use crate::request::IconRequest;
use crate::theme::Theme;
use crate::transform::TransformPlan;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders [`IconRequest`]s against a registry.
///
/// Rendering is a pure function of the request and the (read-only) registry,
/// so one renderer can be shared freely across threads.
///
/// # Output Structure
///
/// ```text
/// svg.b-icon.bi.bi-<name>
/// └── g                      (stacked only, no transform)
///     └── g[translate]       (shift only)
///         └── g[transform?]  rotate/scale/flip around (10, 10)
///             └── glyph content
/// ```
///
/// # Example
///
/// ```
/// use bicon_renderer::{IconRegistry, IconRenderer, IconRequest};
///
/// let registry = IconRegistry::with_builtin();
/// let renderer = IconRenderer::new(&registry);
///
/// let svg = renderer.render(&IconRequest::new("check").rotate(45.0));
/// assert_eq!(
///     svg.select("svg > g").and_then(|g| g.attr("transform")),
///     Some("translate(10 10) rotate(45) translate(-10 -10)")
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IconRenderer<'r> {
    registry: &'r IconRegistry,
    theme: &'r Theme,
}

impl IconRenderer<'static> {
    /// A renderer backed by [`registry::global`].
    pub fn global() -> Self {
        Self::new(registry::global())
    }
}

impl<'r> IconRenderer<'r> {
    pub fn new(registry: &'r IconRegistry) -> Self {
        Self {
            registry,
            theme: Theme::bootstrap(),
        }
    }

    /// Uses `theme` to resolve variant colors when rasterizing.
    pub fn with_theme(mut self, theme: &'r Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn registry(&self) -> &'r IconRegistry {
        self.registry
    }

    /// Renders a request into an element tree.
    pub fn render(&self, req: &IconRequest) -> Element {
        // Resolve
        let entry = self.registry.resolve(&req.name);
        let stacked = req.stacked || entry.stacked();

        // Compute transforms
        let plan = TransformPlan::for_request(req);

        // Build attributes
        let classes = build_classes(entry.name(), req.variant.as_deref(), req.animation.as_deref());
        let attrs = build_attributes(stacked, req.font_scale);

        // Compose
        let mut inner = Element::new("g");
        if let Some(pivot) = plan.pivot {
            inner = inner.with_attr("transform", pivot);
        }
        inner = inner.with_children(entry.render());

        if let Some(shift) = plan.shift {
            inner = Element::new("g").with_attr("transform", shift).with_child(inner);
        }
        if stacked {
            inner = Element::new("g").with_child(inner);
        }

        let mut root = Element::new("svg").with_classes(classes).with_child(inner);
        root.attrs = attrs;
        root
    }

    /// Renders host-supplied props.
    pub fn render_props(&self, props: &IconProps) -> Element {
        self.render(&props.resolve())
    }

    /// Renders straight to SVG markup.
    pub fn render_svg(&self, req: &IconRequest) -> String {
        self.render(req).to_svg()
    }

    /// Renders and rasterizes to a `size`x`size` image.
    ///
    /// `currentColor` is taken from the request's variant through the theme.
    pub fn rasterize(&self, req: &IconRequest, size: u32) -> Result<RgbaImage> {
        let color = self.theme.color_for(req.variant.as_deref());
        raster::rasterize(&self.render(req), size, color)
    }
}

/// Renders with the global registry.
pub fn render_icon(req: &IconRequest) -> Element {
    IconRenderer::global().render(req)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> IconRegistry {
        let mut registry = IconRegistry::with_builtin();
        registry
            .register("FakeIconTest", r#"<path class="fake-path" />"#)
            .unwrap();
        registry
    }

    fn classes(el: &Element) -> Vec<&str> {
        el.classes.iter().map(String::as_str).collect()
    }

    fn transform<'a>(el: &'a Element, selector: &str) -> Option<&'a str> {
        el.select(selector).and_then(|g| g.attr("transform"))
    }

    #[test]
    fn expected_structure() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(&IconRequest::new("alert-circle-fill"));

        assert_eq!(svg.tag, "svg");
        assert_eq!(classes(&svg), vec!["b-icon", "bi", "bi-alert-circle-fill"]);
        assert_eq!(svg.attr("role"), Some("img"));
        assert_eq!(svg.attr("alt"), Some("icon"));
        assert_eq!(svg.attr("focusable"), Some("false"));
        assert_eq!(svg.attr("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(svg.attr("width"), Some("1em"));
        assert_eq!(svg.attr("height"), Some("1em"));
        assert_eq!(svg.attr("viewBox"), Some("0 0 20 20"));
        assert_eq!(svg.attr("fill"), Some("currentColor"));
        assert_eq!(svg.attr("style"), None);
        assert!(svg.select("svg > g").is_some());
        assert_eq!(transform(&svg, "svg > g"), None);
        assert!(svg.select("svg > g > path").is_some());
    }

    #[test]
    fn stacked_structure() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("alert-circle-fill").stacked(true));

        assert_eq!(classes(&svg), vec!["b-icon", "bi", "bi-alert-circle-fill"]);
        for absent in ["role", "alt", "xmlns", "width", "height"] {
            assert_eq!(svg.attr(absent), None, "{absent} should be absent");
        }
        assert_eq!(svg.attr("focusable"), Some("false"));
        assert_eq!(svg.attr("viewBox"), Some("0 0 20 20"));
        assert_eq!(svg.attr("fill"), Some("currentColor"));
        assert_eq!(svg.attr("style"), None);
        assert_eq!(transform(&svg, "svg > g"), None);
        assert!(svg.select("svg > g > path").is_none());
        assert!(svg.select("svg > g > g > path").is_some());
    }

    #[test]
    fn layer_glyph_renders_stacked() {
        let mut registry = registry();
        registry.register_layer("badge", r#"<circle cx="15" cy="5" r="3"/>"#).unwrap();
        let svg = IconRenderer::new(&registry).render(&IconRequest::new("badge"));
        assert_eq!(svg.attr("width"), None);
        assert!(svg.select("svg > g > g > circle").is_some());
    }

    #[test]
    fn empty_or_missing_name_renders_blank() {
        let registry = registry();
        let renderer = IconRenderer::new(&registry);
        for name in ["", "   "] {
            let svg = renderer.render(&IconRequest::new(name));
            assert_eq!(svg.text(), "");
            assert_eq!(classes(&svg), vec!["b-icon", "bi", "bi-blank"]);
            let g = svg.select("svg > g").unwrap();
            assert!(g.is_empty());
            assert_eq!(g.attr("transform"), None);
        }
        let svg = renderer.render(&IconRequest::default());
        assert!(svg.select("svg > g").unwrap().is_empty());
    }

    #[test]
    fn unknown_name_renders_blank() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(&IconRequest::new("unknown-icon-name"));
        assert_eq!(classes(&svg), vec!["b-icon", "bi", "bi-blank"]);
        assert_eq!(transform(&svg, "svg > g"), None);
        assert!(svg.select("svg > g").unwrap().is_empty());
    }

    #[test]
    fn variant_class() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("alert-circle-fill").variant("danger"));
        assert_eq!(
            classes(&svg),
            vec!["b-icon", "bi", "bi-alert-circle-fill", "text-danger"]
        );
        assert_eq!(svg.attr("role"), Some("img"));
        assert_eq!(transform(&svg, "svg > g"), None);
        assert!(svg.select("svg > g > path").is_some());
    }

    #[test]
    fn font_scale_style() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("alert-circle-fill").font_scale(1.25));
        assert_eq!(classes(&svg).len(), 3);
        assert_eq!(svg.attr("style"), Some("font-size: 125%"));
        assert_eq!(transform(&svg, "svg > g"), None);
    }

    #[test]
    fn custom_icon() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(&IconRequest::new("fake-icon-test"));
        assert_eq!(classes(&svg), vec!["b-icon", "bi", "bi-fake-icon-test"]);
        assert_eq!(transform(&svg, "svg > g"), None);
        assert!(svg.select("svg > g > path.fake-path").is_some());
    }

    #[test]
    fn rotate_transform() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("alert-circle-fill").rotate(45.0));
        assert_eq!(classes(&svg).len(), 3);
        assert_eq!(
            transform(&svg, "svg > g"),
            Some("translate(10 10) rotate(45) translate(-10 -10)")
        );
        assert!(svg.select("svg > g > path").is_some());
    }

    #[test]
    fn scale_and_flip_transforms() {
        let registry = registry();
        let renderer = IconRenderer::new(&registry);
        let base = IconRequest::new("alert-circle-fill");
        let cases = [
            (base.clone().scale(1.5), "scale(1.5 1.5)"),
            (base.clone().flip_h(true), "scale(-1 1)"),
            (base.clone().flip_v(true), "scale(1 -1)"),
            (base.clone().flip_h(true).flip_v(true), "scale(-1 -1)"),
            (base.clone().scale(1.5).flip_h(true), "scale(-1.5 1.5)"),
            (base.clone().scale(1.5).flip_v(true), "scale(1.5 -1.5)"),
            (base.clone().scale(1.5).flip_h(true).flip_v(true), "scale(-1.5 -1.5)"),
        ];
        for (req, expected) in cases {
            let svg = renderer.render(&req);
            assert_eq!(
                transform(&svg, "svg > g"),
                Some(format!("translate(10 10) {expected} translate(-10 -10)").as_str())
            );
            assert!(svg.select("svg > g > path").is_some());
        }
    }

    #[test]
    fn shift_wraps_untransformed_group() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("alert-circle-fill").shift(8.0, 16.0));
        assert_eq!(classes(&svg).len(), 3);
        assert_eq!(transform(&svg, "svg > g"), Some("translate(10 -20)"));
        assert!(svg.select("svg > g > g").is_some());
        assert_eq!(transform(&svg, "svg > g > g"), None);
        assert!(svg.select("svg > g > g > path").is_some());
    }

    #[test]
    fn shift_wraps_rotation() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(
            &IconRequest::new("alert-circle-fill")
                .rotate(45.0)
                .shift(8.0, 16.0),
        );
        assert_eq!(transform(&svg, "svg > g"), Some("translate(10 -20)"));
        assert_eq!(
            transform(&svg, "svg > g > g"),
            Some("translate(10 10) rotate(45) translate(-10 -10)")
        );
        assert!(svg.select("svg > g > g > path").is_some());
    }

    #[test]
    fn stacked_with_shift_nests_three_groups() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(
            &IconRequest::new("circle-fill")
                .stacked(true)
                .rotate(90.0)
                .shift(0.0, 4.0),
        );
        assert_eq!(transform(&svg, "svg > g"), None);
        assert_eq!(transform(&svg, "svg > g > g"), Some("translate(0 -5)"));
        assert_eq!(
            transform(&svg, "svg > g > g > g"),
            Some("translate(10 10) rotate(90) translate(-10 -10)")
        );
        assert!(svg.select("svg > g > g > g > circle").is_some());
    }

    #[test]
    fn animation_class() {
        let registry = registry();
        let svg = IconRenderer::new(&registry)
            .render(&IconRequest::new("circle-fill").animation("spin"));
        assert_eq!(
            classes(&svg),
            vec!["b-icon", "bi", "bi-circle-fill", "b-icon-animation-spin"]
        );
    }

    #[test]
    fn identity_has_no_transform_anywhere() {
        let registry = registry();
        let svg = IconRenderer::new(&registry).render(&IconRequest::new("circle-fill"));
        assert!(!svg.to_svg().contains("transform"));
    }

    #[test]
    fn svg_markup() {
        let registry = registry();
        let markup = IconRenderer::new(&registry)
            .render_svg(&IconRequest::new("circle-fill").variant("primary"));
        assert_eq!(
            markup,
            concat!(
                r#"<svg class="b-icon bi bi-circle-fill text-primary" viewBox="0 0 20 20" width="1em" height="1em" "#,
                r#"xmlns="http://www.w3.org/2000/svg" fill="currentColor" focusable="false" role="img" alt="icon">"#,
                r#"<g><circle cx="10" cy="10" r="8"/></g></svg>"#
            )
        );
    }

    #[test]
    fn rendering_is_idempotent_across_threads() {
        let registry = registry();
        let renderer = IconRenderer::new(&registry);
        let req = IconRequest::new("alert-circle-fill")
            .variant("danger")
            .rotate(30.0)
            .shift(2.0, -3.0)
            .font_scale(1.5);
        let expected = renderer.render_svg(&req);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| renderer.render_svg(&req)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
        assert_eq!(renderer.render_svg(&req), expected);
    }

    #[test]
    fn props_render_with_string_numbers() {
        let registry = registry();
        let props = IconProps::from_json(
            r#"{"icon": "alert-circle-fill", "scale": "1.5", "flipH": true, "fontScale": "1.25"}"#,
        )
        .unwrap();
        let svg = IconRenderer::new(&registry).render_props(&props);
        assert_eq!(
            transform(&svg, "svg > g"),
            Some("translate(10 10) scale(-1.5 1.5) translate(-10 -10)")
        );
        assert_eq!(svg.attr("style"), Some("font-size: 125%"));
    }

    #[test]
    fn global_renderer_uses_builtins() {
        let svg = render_icon(&IconRequest::new("check"));
        assert!(svg.has_class("bi-check"));
        assert!(svg.select("svg > g > path").is_some());
    }
}
