//! The root graph and its clusters.

use std::ops::{Deref, DerefMut};

use infradot_recorder::{Recorder, write_indent};
use tracing::debug;

use crate::container::GraphContainer;

/// Prefix Graphviz requires on a subgraph id to draw it as a cluster.
pub const CLUSTER_PREFIX: &str = "cluster_";

/// Font size used for graph titles.
pub const TITLE_FONT_SIZE: u32 = 30;

/// A named cluster inside the root graph.
///
/// Derefs to its [`GraphContainer`] for node and edge creation.
#[derive(Debug, Clone)]
pub struct SubGraph {
    id: String,
    body: GraphContainer,
}

impl SubGraph {
    fn new(id: String) -> Self {
        Self {
            id,
            body: GraphContainer::new(),
        }
    }

    /// The id edges use in `lhead`/`ltail` anchors.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn with_label(&mut self, label: &str) -> &mut Self {
        self.body.attributes_mut().add_label(label);
        self
    }

    pub fn with_font_size(&mut self, size: u32) -> &mut Self {
        self.body.attributes_mut().add_font_size(size);
        self
    }

    pub fn render(&self, out: &mut dyn Recorder, indent: usize) {
        write_indent(out, indent);
        out.write("subgraph ");
        out.write_label(&self.id);
        out.writeline(" {");
        self.body.render(out, indent + 1);
        write_indent(out, indent);
        out.writeline("}");
    }
}

impl Deref for SubGraph {
    type Target = GraphContainer;

    fn deref(&self) -> &GraphContainer {
        &self.body
    }
}

impl DerefMut for SubGraph {
    fn deref_mut(&mut self) -> &mut GraphContainer {
        &mut self.body
    }
}

/// The document root.
///
/// Always carries `compound=true` so edges may be clipped at cluster
/// boundaries. Derefs to its [`GraphContainer`] for root-level nodes and
/// edges.
#[derive(Debug, Clone)]
pub struct Graph {
    body: GraphContainer,
    subgraphs: Vec<SubGraph>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        let mut body = GraphContainer::new();
        body.attributes_mut().add_compound();
        Self {
            body,
            subgraphs: Vec::new(),
        }
    }

    pub fn subgraphs(&self) -> &[SubGraph] {
        &self.subgraphs
    }

    pub fn subgraph(&self, id: &str) -> Option<&SubGraph> {
        self.subgraphs.iter().find(|s| s.id() == id)
    }

    pub fn subgraph_mut(&mut self, id: &str) -> Option<&mut SubGraph> {
        self.subgraphs.iter_mut().find(|s| s.id() == id)
    }

    /// Track a new subgraph with `id` used verbatim.
    pub fn create_subgraph(&mut self, id: impl Into<String>) -> &mut SubGraph {
        self.subgraphs.push(SubGraph::new(id.into()));
        let idx = self.subgraphs.len() - 1;
        &mut self.subgraphs[idx]
    }

    /// Create a cluster `cluster_<id>` with a title.
    pub fn create_diagram_cluster(&mut self, id: &str, label: &str, font_size: u32) -> &mut SubGraph {
        let cluster = self.create_subgraph(format!("{}{}", CLUSTER_PREFIX, id));
        cluster.with_label(label).with_font_size(font_size);
        cluster
    }

    pub fn add_title(&mut self, title: &str) -> &mut Self {
        let attrs = self.body.attributes_mut();
        attrs.add_label(title);
        attrs.add_font_size(TITLE_FONT_SIZE);
        self
    }

    /// Write the whole document: root attributes, nodes and edges, then
    /// every cluster in creation order.
    pub fn render(&self, out: &mut dyn Recorder) {
        debug!(
            "rendering graph: {} nodes, {} edges, {} clusters",
            self.body.nodes().len(),
            self.body.edges().len(),
            self.subgraphs.len()
        );
        out.writeline("digraph G {");
        self.body.render(out, 1);
        for subgraph in &self.subgraphs {
            subgraph.render(out, 1);
        }
        out.writeline("}");
    }

    /// Render into a fresh string.
    pub fn to_dot(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.render(&mut out);
        out
    }
}

impl Deref for Graph {
    type Target = GraphContainer;

    fn deref(&self) -> &GraphContainer {
        &self.body
    }
}

impl DerefMut for Graph {
    fn deref_mut(&mut self) -> &mut GraphContainer {
        &mut self.body
    }
}
