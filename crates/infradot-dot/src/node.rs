//! Graph vertices.

use infradot_recorder::{Recorder, write_indent};

use crate::attrs::Attributes;
use crate::shape::Shape;

/// Implicit outgoing edge carried by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fanout {
    target: String,
    label: Option<String>,
}

/// A named vertex.
///
/// Setters append to the attribute bag and return the node so calls can be
/// chained. Calling a setter twice keeps both values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    attrs: Attributes,
    target: Option<Fanout>,
}

impl Node {
    /// Nodes are created through
    /// [`GraphContainer::add_node`](crate::GraphContainer::add_node), which
    /// validates the name.
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            attrs: Attributes::new(),
            target: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.target.as_str())
    }

    pub fn with_shape(&mut self, shape: Shape) -> &mut Self {
        self.attrs.add_shape(shape);
        self
    }

    pub fn with_label(&mut self, label: &str) -> &mut Self {
        self.attrs.add_label(label);
        self
    }

    pub fn with_font_size(&mut self, size: u32) -> &mut Self {
        self.attrs.add_font_size(size);
        self
    }

    pub fn make_invisible(&mut self) -> &mut Self {
        self.attrs.add_invisible();
        self
    }

    /// Point the node's implicit edge at `target`, replacing any earlier one.
    pub fn with_target(&mut self, target: &str, label: Option<&str>) -> &mut Self {
        self.target = Some(Fanout {
            target: target.to_string(),
            label: label.map(str::to_string),
        });
        self
    }

    /// `"<name>" [ attrs ] ;`, plus `"<name>"->"<target>" ... ;` when the
    /// node has an implicit edge.
    pub fn render(&self, out: &mut dyn Recorder, indent: usize) {
        write_indent(out, indent);
        out.write_label(&self.name);
        self.attrs.render_inline(out);
        out.writeline(" ;");

        if let Some(fanout) = &self.target {
            let mut attrs = Attributes::new();
            if let Some(label) = &fanout.label {
                attrs.add_label(label);
            }
            write_indent(out, indent);
            out.write_label(&self.name);
            out.write("->");
            out.write_label(&fanout.target);
            attrs.render_inline(out);
            out.writeline(" ;");
        }
    }
}
