//! DOM-like element description produced by the renderer.
//!
//! An [`Element`] is what a host runtime turns into real nodes. It can also
//! be written straight to SVG markup with [`Element::to_svg`] or serialized
//! as JSON through serde.

use indexmap::IndexMap;
use serde::Serialize;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

// ============================================================================
// Node
// ============================================================================

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Parses an SVG body fragment (the markup that goes inside `<svg>`).
    ///
    /// Whitespace-only text and comments are dropped.
    pub fn parse_fragment(markup: &str) -> Result<Vec<Node>, roxmltree::Error> {
        let wrapped = format!(r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}">{markup}</svg>"#);
        let doc = roxmltree::Document::parse(&wrapped)?;
        Ok(doc.root_element().children().filter_map(convert).collect())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> Option<Node> {
    if node.is_text() {
        let text = node.text()?;
        return (!text.trim().is_empty()).then(|| Node::Text(text.to_string()));
    }
    if !node.is_element() {
        return None;
    }

    let mut el = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        let name = match attr.namespace() {
            Some(XLINK_NS) => format!("xlink:{}", attr.name()),
            _ => attr.name().to_string(),
        };
        if name == "class" {
            el.classes
                .extend(attr.value().split_whitespace().map(str::to_string));
        } else {
            el.attrs.insert(name, attr.value().to_string());
        }
    }
    el.children = node.children().filter_map(convert).collect();
    Some(Node::Element(el))
}

// ============================================================================
// Element
// ============================================================================

/// A tag with classes, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_classes(mut self, classes: impl IntoIterator<Item = String>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the element has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text content of the subtree.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Finds the first element matching a child-combinator selector.
    ///
    /// Each step is a tag name (`*` for any) optionally followed by
    /// `.class` parts, e.g. `svg > g > path.fake-path`. The first step
    /// must match `self`.
    pub fn select(&self, selector: &str) -> Option<&Element> {
        let steps: Vec<Step<'_>> = selector.split('>').map(Step::parse).collect();
        let (first, rest) = steps.split_first()?;
        if !first.matches(self) {
            return None;
        }
        self.select_steps(rest)
    }

    fn select_steps(&self, steps: &[Step<'_>]) -> Option<&Element> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(self);
        };
        self.child_elements()
            .filter(|child| step.matches(child))
            .find_map(|child| child.select_steps(rest))
    }

    /// Serializes the element tree as SVG/XML markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out);
        out
    }

    pub fn write_svg(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            escape_into(out, &self.classes.join(" "), true);
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_svg(out),
                Node::Text(t) => escape_into(out, t, false),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

struct Step<'a> {
    tag: &'a str,
    classes: Vec<&'a str>,
}

impl<'a> Step<'a> {
    fn parse(raw: &'a str) -> Self {
        let mut parts = raw.trim().split('.');
        let tag = parts.next().unwrap_or_default();
        Self {
            tag,
            classes: parts.filter(|c| !c.is_empty()).collect(),
        }
    }

    fn matches(&self, el: &Element) -> bool {
        (self.tag.is_empty() || self.tag == "*" || self.tag == el.tag)
            && self.classes.iter().all(|c| el.has_class(c))
    }
}

fn escape_into(out: &mut String, text: &str, attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
