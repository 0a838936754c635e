//! Icon registry and name resolution.
//!
//! The registry maps a canonical icon name to a [`GlyphRenderer`]. Lookups
//! never fail: empty, unknown or malformed names resolve to the built-in
//! `blank` entry, which renders no content.
//!
//! A process normally builds one registry at startup, registers the built-in
//! catalog plus any custom glyphs, and then [`install`]s it. After that the
//! registry is only read, so concurrent renders need no locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::catalog;
use crate::element::Node;
use crate::error::{IconError, Result};

/// Name of the fallback entry.
pub const BLANK: &str = "blank";

// ============================================================================
// GlyphRenderer
// ============================================================================

/// Produces the content of one glyph.
///
/// Implemented by [`Glyph`] for static markup, and by any
/// `Fn() -> Vec<Node> + Send + Sync` closure for computed content.
pub trait GlyphRenderer: Send + Sync {
    /// Returns the nodes placed inside the innermost group.
    fn render(&self) -> Vec<Node>;

    /// Whether the glyph is a layer meant to sit inside another icon.
    fn stacked(&self) -> bool {
        false
    }
}

impl<F> GlyphRenderer for F
where
    F: Fn() -> Vec<Node> + Send + Sync,
{
    fn render(&self) -> Vec<Node> {
        self()
    }
}

/// Static glyph content parsed once at registration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    nodes: Vec<Node>,
    stacked: bool,
}

impl Glyph {
    /// Parses SVG body markup such as `<path d="..."/>`.
    pub fn parse(name: &str, markup: &str) -> Result<Self> {
        let nodes = Node::parse_fragment(markup).map_err(|e| IconError::InvalidGlyph {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            nodes,
            stacked: false,
        })
    }

    /// Marks the glyph as a stacking layer.
    pub fn as_layer(mut self) -> Self {
        self.stacked = true;
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl GlyphRenderer for Glyph {
    fn render(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn stacked(&self) -> bool {
        self.stacked
    }
}

// ============================================================================
// RendererEntry
// ============================================================================

/// A registered renderer under its canonical name.
#[derive(Clone)]
pub struct RendererEntry {
    name: String,
    renderer: Arc<dyn GlyphRenderer>,
}

impl RendererEntry {
    fn new(name: String, renderer: Arc<dyn GlyphRenderer>) -> Self {
        Self { name, renderer }
    }

    fn blank() -> Self {
        Self::new(BLANK.to_string(), Arc::new(Glyph::default()))
    }

    /// Canonical name, used for the `bi-<name>` class.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> Vec<Node> {
        self.renderer.render()
    }

    pub fn stacked(&self) -> bool {
        self.renderer.stacked()
    }

    pub fn is_blank(&self) -> bool {
        self.name == BLANK
    }
}

impl fmt::Debug for RendererEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererEntry")
            .field("name", &self.name)
            .field("stacked", &self.stacked())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// IconRegistry
// ============================================================================

/// Name to renderer mapping with a fixed `blank` fallback.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    entries: HashMap<String, RendererEntry>,
    blank: RendererEntry,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRegistry {
    /// Creates a registry holding only the `blank` fallback.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            blank: RendererEntry::blank(),
        }
    }

    /// Creates a registry preloaded with the built-in catalog.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        catalog::register_builtin(&mut registry);
        registry
    }

    /// Registers static SVG body markup under `name`.
    pub fn register(&mut self, name: &str, markup: &str) -> Result<&RendererEntry> {
        let glyph = Glyph::parse(name, markup)?;
        self.register_renderer(name, glyph)
    }

    /// Registers markup that always renders as a stacking layer.
    pub fn register_layer(&mut self, name: &str, markup: &str) -> Result<&RendererEntry> {
        let glyph = Glyph::parse(name, markup)?.as_layer();
        self.register_renderer(name, glyph)
    }

    /// Registers any renderer under `name`.
    ///
    /// Entries are immutable: registering a name that is already taken
    /// fails with [`IconError::DuplicateName`] and keeps the first entry.
    pub fn register_renderer(
        &mut self,
        name: &str,
        renderer: impl GlyphRenderer + 'static,
    ) -> Result<&RendererEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(IconError::InvalidName(name.to_string()));
        }
        if key == BLANK {
            return Err(IconError::ReservedName(name.to_string()));
        }
        if self.entries.contains_key(&key) {
            tracing::warn!(name = %key, "icon already registered");
            return Err(IconError::DuplicateName(key));
        }

        let entry = RendererEntry::new(key.clone(), Arc::new(renderer));
        self.entries.insert(key.clone(), entry);
        Ok(&self.entries[&key])
    }

    /// Looks up a registered entry without falling back.
    pub fn get(&self, name: &str) -> Option<&RendererEntry> {
        self.entries.get(&normalize_name(name))
    }

    /// Resolves `name` to a renderer, falling back to `blank`.
    pub fn resolve(&self, name: &str) -> &RendererEntry {
        let key = normalize_name(name);
        if key.is_empty() {
            return &self.blank;
        }
        match self.entries.get(&key) {
            Some(entry) => entry,
            None => {
                if key != BLANK {
                    tracing::debug!(requested = name, normalized = %key, "unknown icon, rendering blank");
                }
                &self.blank
            }
        }
    }

    /// The fallback entry.
    pub fn blank(&self) -> &RendererEntry {
        &self.blank
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ============================================================================
// Global Registry
// ============================================================================

static GLOBAL: OnceLock<IconRegistry> = OnceLock::new();

/// Installs the process-wide registry. Only the first call succeeds.
pub fn install(registry: IconRegistry) -> Result<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| IconError::RegistryInstalled)
}

/// Returns the installed registry, or the built-in catalog if none was installed.
pub fn global() -> &'static IconRegistry {
    GLOBAL.get_or_init(IconRegistry::with_builtin)
}

// ============================================================================
// Name Normalization
// ============================================================================

/// Normalizes an icon name to lowercase kebab case.
///
/// Accepts kebab, snake, space separated, camel and Pascal case, and strips a
/// leading `b-icon-` component prefix: `BIconAlertCircleFill`,
/// `alert_circle_fill` and `Alert Circle Fill` all become `alert-circle-fill`.
///
/// A digit run never starts a word, so `grid-3x3-gap`, `Grid3x3Gap` and
/// `BIconGrid3x3Gap` all become `grid3x3-gap`.
pub fn normalize_name(raw: &str) -> String {
    let chars: Vec<char> = raw.trim().chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            flush(&mut words, &mut word);
            continue;
        }
        if ch.is_uppercase() && !word.is_empty() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                flush(&mut words, &mut word);
            }
        }
        word.extend(ch.to_lowercase());
    }
    flush(&mut words, &mut word);

    if words.len() > 2 && words[0] == "b" && words[1] == "icon" {
        words.drain(..2);
    }

    let mut joined: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        match joined.last_mut() {
            Some(prev) if word.starts_with(|c: char| c.is_ascii_digit()) => prev.push_str(&word),
            _ => joined.push(word),
        }
    }
    joined.join("-")
}

fn flush(words: &mut Vec<String>, word: &mut String) {
    if !word.is_empty() {
        words.push(std::mem::take(word));
    }
}
