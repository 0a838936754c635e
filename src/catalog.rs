//! Built-in glyph catalog.
//!
//! A small starter set drawn on the 20x20 design grid. Applications that
//! ship a full icon font register their own glyphs on top of this.

use crate::registry::IconRegistry;

/// `(name, svg body)` pairs registered by [`register_builtin`].
pub const BUILTIN_GLYPHS: &[(&str, &str)] = &[
    (
        "alert-circle",
        r#"<path fill-rule="evenodd" d="M10 17a7 7 0 1 0 0-14 7 7 0 0 0 0 14zm0 1a8 8 0 1 0 0-16 8 8 0 0 0 0 16z" clip-rule="evenodd"/><path d="M9.1 6.5a.9.9 0 1 1 1.8 0l-.35 4.5a.55.55 0 0 1-1.1 0z"/><circle cx="10" cy="13.5" r="1"/>"#,
    ),
    (
        "alert-circle-fill",
        r#"<path fill-rule="evenodd" d="M10 18a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM9.1 6.5a.9.9 0 1 1 1.8 0l-.35 4.5a.55.55 0 0 1-1.1 0zM10 14.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2z" clip-rule="evenodd"/>"#,
    ),
    (
        "arrow-down",
        r#"<path fill-rule="evenodd" d="M10 3.5a.5.5 0 0 1 .5.5v10.8l3.65-3.65a.5.5 0 0 1 .7.7l-4.5 4.5a.5.5 0 0 1-.7 0l-4.5-4.5a.5.5 0 0 1 .7-.7l3.65 3.65V4a.5.5 0 0 1 .5-.5z" clip-rule="evenodd"/>"#,
    ),
    (
        "arrow-up",
        r#"<path fill-rule="evenodd" d="M10 16.5a.5.5 0 0 1-.5-.5V5.2L5.85 8.85a.5.5 0 0 1-.7-.7l4.5-4.5a.5.5 0 0 1 .7 0l4.5 4.5a.5.5 0 0 1-.7.7L10.5 5.2V16a.5.5 0 0 1-.5.5z" clip-rule="evenodd"/>"#,
    ),
    (
        "check",
        r#"<path fill-rule="evenodd" d="M15.35 5.65a.5.5 0 0 1 0 .7l-7 7a.5.5 0 0 1-.7 0l-3-3a.5.5 0 0 1 .7-.7L8 12.29l6.65-6.64a.5.5 0 0 1 .7 0z" clip-rule="evenodd"/>"#,
    ),
    ("circle", r#"<path fill-rule="evenodd" d="M10 17a7 7 0 1 0 0-14 7 7 0 0 0 0 14zm0 1a8 8 0 1 0 0-16 8 8 0 0 0 0 16z" clip-rule="evenodd"/>"#),
    ("circle-fill", r#"<circle cx="10" cy="10" r="8"/>"#),
    (
        "dash",
        r#"<path fill-rule="evenodd" d="M4.5 10a.5.5 0 0 1 .5-.5h10a.5.5 0 0 1 0 1H5a.5.5 0 0 1-.5-.5z" clip-rule="evenodd"/>"#,
    ),
    (
        "plus",
        r#"<path fill-rule="evenodd" d="M10 4.5a.5.5 0 0 1 .5.5v4.5H15a.5.5 0 0 1 0 1h-4.5V15a.5.5 0 0 1-1 0v-4.5H5a.5.5 0 0 1 0-1h4.5V5a.5.5 0 0 1 .5-.5z" clip-rule="evenodd"/>"#,
    ),
    ("square", r#"<path fill-rule="evenodd" d="M15 3H5a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2V5a2 2 0 0 0-2-2zM5 4h10a1 1 0 0 1 1 1v10a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1z" clip-rule="evenodd"/>"#),
    ("square-fill", r#"<rect width="14" height="14" x="3" y="3" rx="2"/>"#),
    (
        "x",
        r#"<path fill-rule="evenodd" d="M5.65 5.65a.5.5 0 0 1 .7 0L10 9.29l3.65-3.64a.5.5 0 0 1 .7.7L10.71 10l3.64 3.65a.5.5 0 0 1-.7.7L10 10.71l-3.65 3.64a.5.5 0 0 1-.7-.7L9.29 10 5.65 6.35a.5.5 0 0 1 0-.7z" clip-rule="evenodd"/>"#,
    ),
];

/// Registers every built-in glyph.
pub fn register_builtin(registry: &mut IconRegistry) {
    for (name, markup) in BUILTIN_GLYPHS {
        if let Err(err) = registry.register(name, markup) {
            tracing::error!(%name, %err, "failed to register built-in glyph");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_parses() {
        let mut registry = IconRegistry::new();
        register_builtin(&mut registry);
        assert_eq!(registry.len(), BUILTIN_GLYPHS.len());
        for (name, _) in BUILTIN_GLYPHS {
            let entry = registry.resolve(name);
            assert_eq!(entry.name(), *name);
            assert!(!entry.render().is_empty(), "{name} has no content");
        }
    }
}
