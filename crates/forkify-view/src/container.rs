//! Live output container owned by a view.

use std::fmt;

use crate::node::Node;

/// The region of the host UI a view renders into.
///
/// `selector` names the region in the host document (`.recipe`,
/// `.results`, ...). The container counts full replaces so callers can tell
/// a patch from a re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    selector: String,
    nodes: Vec<Node>,
    full_renders: usize,
}

impl Container {
    pub fn new(selector: impl Into<String>) -> Self {
        Container {
            selector: selector.into(),
            nodes: Vec::new(),
            full_renders: 0,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access for in-place patching.
    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Inserts `nodes` at the start of the container.
    pub fn insert(&mut self, nodes: Vec<Node>) {
        let tail = std::mem::replace(&mut self.nodes, nodes);
        self.nodes.extend(tail);
    }

    /// Clears the container and inserts `nodes`.
    pub fn replace(&mut self, nodes: Vec<Node>) {
        self.clear();
        self.insert(nodes);
        self.full_renders += 1;
    }

    /// Number of full replaces so far.
    pub fn full_renders(&self) -> usize {
        self.full_renders
    }

    /// Concatenated text of the container's content.
    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            fmt::Display::fmt(node, f)?;
        }
        Ok(())
    }
}
