//! # Node Tree
//!
//! A minimal ordered tree standing in for the host UI's document: elements
//! with a tag, ordered attributes and children, plus text leaves.
//!
//! ```text
//! Element("li", [class="preview"])
//! └── Element("a", [href="#id"])
//!     ├── Element("h4") ── Text("Pizza")
//!     └── Element("p")  ── Text("Publisher")
//! ```
//!
//! Only elements take part in the flattened pre-order walk used by
//! reconciliation, mirroring a `querySelectorAll('*')` over the container.

use std::fmt;

// =============================================================================
// Node
// =============================================================================

/// One node of a view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Deep structural equality; attribute order is ignored.
    pub fn is_equal_node(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Element(a), Node::Element(b)) => a.is_equal_node(b),
            _ => false,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => el.children.iter().for_each(|c| c.push_text(out)),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Creates an element builder.
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

/// Creates a text leaf.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

// =============================================================================
// Element
// =============================================================================

/// An element node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Sets an attribute, builder style.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child, builder style.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends several children, builder style.
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child, builder style.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(value.into()));
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets or replaces an attribute. Returns true if the value changed.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) if *existing == value => false,
            Some((_, existing)) => {
                *existing = value;
                true
            }
            None => {
                self.attributes.push((name.to_string(), value));
                true
            }
        }
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Replaces all children with a single text leaf (none if `value` is empty).
    pub fn set_text_content(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.children.clear();
        if !value.is_empty() {
            self.children.push(Node::Text(value));
        }
    }

    /// Deep structural equality; attribute order is ignored.
    pub fn is_equal_node(&self, other: &Element) -> bool {
        self.tag == other.tag
            && self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .all(|(name, value)| other.get_attribute(name) == Some(value.as_str()))
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.is_equal_node(b))
    }
}

// =============================================================================
// Pre-order Traversal
// =============================================================================

/// Collects every element under `nodes` in document (pre-)order.
pub fn flatten_elements(nodes: &[Node]) -> Vec<&Element> {
    let mut out = Vec::new();
    collect(nodes, &mut out);
    out
}

fn collect<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            out.push(el);
            collect(&el.children, out);
        }
    }
}

/// Returns the `index`-th element of the pre-order walk, mutably.
pub fn element_at_mut(nodes: &mut [Node], index: usize) -> Option<&mut Element> {
    let mut counter = 0;
    find_mut(nodes, index, &mut counter)
}

fn find_mut<'a>(nodes: &'a mut [Node], target: usize, counter: &mut usize) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if *counter == target {
                return Some(el);
            }
            *counter += 1;
            if let Some(found) = find_mut(&mut el.children, target, counter) {
                return Some(found);
            }
        }
    }
    None
}

// =============================================================================
// HTML Output
// =============================================================================

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(value) => f.write_str(&escape(value, false)),
            Node::Element(el) => fmt::Display::fmt(el, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(value: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
