//! Node and edge aggregate shared by the root graph and its clusters.

use infradot_error::{Error, Result};
use infradot_recorder::Recorder;
use tracing::trace;

use crate::attrs::Attributes;
use crate::edge::Edge;
use crate::node::Node;

/// Ordered nodes and edges plus the container's own attributes.
///
/// Nodes and edges render in insertion order. Ids are not checked for
/// uniqueness.
#[derive(Debug, Clone, Default)]
pub struct GraphContainer {
    attrs: Attributes,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First node named `id`.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == id)
    }

    /// Append a node. Fails with `InvalidIdentifier` when `id` is empty.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<&mut Node> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid_identifier("node").with_operation("dot::add_node"));
        }
        trace!("adding node '{}'", id);
        self.nodes.push(Node::new(id));
        let idx = self.nodes.len() - 1;
        Ok(&mut self.nodes[idx])
    }

    /// Append a new edge, even if one with the same endpoints exists.
    pub fn add_edge(&mut self, begin: impl Into<String>, end: impl Into<String>) -> &mut Edge {
        self.edges.push(Edge::new(begin, end));
        let idx = self.edges.len() - 1;
        &mut self.edges[idx]
    }

    /// Return the existing `begin -> end` edge, or append one.
    ///
    /// Decorations applied to the returned edge accumulate on the first edge
    /// created for the pair.
    pub fn add_edge_ignore_dup(&mut self, begin: &str, end: &str) -> &mut Edge {
        match self.edges.iter().position(|e| e.connects(begin, end)) {
            Some(idx) => {
                trace!("reusing edge '{}' -> '{}'", begin, end);
                &mut self.edges[idx]
            }
            None => self.add_edge(begin, end),
        }
    }

    /// Attributes as a block, then nodes, then edges.
    pub(crate) fn render(&self, out: &mut dyn Recorder, indent: usize) {
        self.attrs.render_block(out, indent);
        for node in &self.nodes {
            node.render(out, indent);
        }
        for edge in &self.edges {
            edge.render(out, indent);
        }
    }
}
