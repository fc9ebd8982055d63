//! Append-only attribute bags for nodes, edges and graphs.

use infradot_recorder::{Recorder, escape_label, write_indent};

use crate::shape::Shape;

/// Arrowhead decorations for edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrowhead {
    Dot,
    Box,
}

impl Arrowhead {
    fn as_str(&self) -> &'static str {
        match self {
            Arrowhead::Dot => "dot",
            Arrowhead::Box => "box",
        }
    }
}

/// Ordered list of rendered attribute tokens.
///
/// Tokens are only ever appended. Setting the same attribute twice keeps
/// both tokens, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    tokens: Vec<String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    pub fn add_label(&mut self, label: &str) {
        self.push(format!("label=\"{}\"", escape_label(label)));
    }

    pub fn add_font_size(&mut self, size: u32) {
        self.push(format!("fontsize = {}", size));
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.push(shape.token().to_string());
    }

    pub fn add_no_direction(&mut self) {
        self.push("dir=none".to_string());
    }

    pub fn add_dotted(&mut self) {
        self.push("style=dotted".to_string());
    }

    pub fn add_invisible(&mut self) {
        self.push("style=invis".to_string());
    }

    pub fn add_arrowhead(&mut self, arrowhead: Arrowhead) {
        self.push(format!("arrowhead={}", arrowhead.as_str()));
    }

    /// Clip the edge head at the boundary of `cluster`.
    pub fn add_lhead(&mut self, cluster: &str) {
        self.push(format!("lhead=\"{}\"", escape_label(cluster)));
    }

    /// Clip the edge tail at the boundary of `cluster`.
    pub fn add_ltail(&mut self, cluster: &str) {
        self.push(format!("ltail=\"{}\"", escape_label(cluster)));
    }

    pub fn add_compound(&mut self) {
        self.push("compound=true".to_string());
    }

    /// Render as a node/edge attribute list: ` [ a b ]`.
    pub fn render_inline(&self, out: &mut dyn Recorder) {
        if self.is_empty() {
            return;
        }
        out.write(" [");
        for token in &self.tokens {
            out.write(" ");
            out.write(token);
        }
        out.write(" ]");
    }

    /// Render as graph/cluster level statements, one per line.
    pub fn render_block(&self, out: &mut dyn Recorder, indent: usize) {
        for token in &self.tokens {
            write_indent(out, indent);
            out.writeline(token);
        }
    }
}
