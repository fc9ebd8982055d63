//! Directed edges between named endpoints.

use std::hash::{Hash, Hasher};

use infradot_recorder::{Recorder, write_indent};

use crate::attrs::{Arrowhead, Attributes};

/// A directed connection `begin -> end`.
///
/// Equality and hashing only look at the endpoint pair. Labels and
/// decorations are mutable state on the edge, so call sites that reach the
/// same pair through
/// [`add_edge_ignore_dup`](crate::GraphContainer::add_edge_ignore_dup)
/// decorate one shared edge.
#[derive(Debug, Clone)]
pub struct Edge {
    begin: String,
    end: String,
    attrs: Attributes,
}

impl Edge {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub(crate) fn connects(&self, begin: &str, end: &str) -> bool {
        self.begin == begin && self.end == end
    }

    pub fn with_label(&mut self, label: &str) -> &mut Self {
        self.attrs.add_label(label);
        self
    }

    pub fn with_no_arrow(&mut self) -> &mut Self {
        self.attrs.add_no_direction();
        self
    }

    pub fn with_dot(&mut self) -> &mut Self {
        self.attrs.add_arrowhead(Arrowhead::Dot);
        self
    }

    pub fn with_box(&mut self) -> &mut Self {
        self.attrs.add_arrowhead(Arrowhead::Box);
        self
    }

    pub fn with_dotted_line(&mut self) -> &mut Self {
        self.attrs.add_dotted();
        self
    }

    /// Draw the edge from the boundary of `cluster` instead of `begin`.
    pub fn begins_at(&mut self, cluster: &str) -> &mut Self {
        self.attrs.add_ltail(cluster);
        self
    }

    /// Draw the edge into the boundary of `cluster` instead of `end`.
    pub fn ends_at(&mut self, cluster: &str) -> &mut Self {
        self.attrs.add_lhead(cluster);
        self
    }

    pub fn render(&self, out: &mut dyn Recorder, indent: usize) {
        write_indent(out, indent);
        out.write_label(&self.begin);
        out.write("->");
        out.write_label(&self.end);
        self.attrs.render_inline(out);
        out.writeline(" ;");
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.begin.hash(state);
        self.end.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_decorations() {
        let mut a = Edge::new("elb-1", "i-1");
        a.with_label("80").with_dot();
        let b = Edge::new("elb-1", "i-1");
        assert_eq!(a, b);
        assert_ne!(a, Edge::new("i-1", "elb-1"));

        let set: HashSet<Edge> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_render() {
        let mut edge = Edge::new("sg-1", "sg-2");
        edge.with_label("tcp 443")
            .with_no_arrow()
            .with_box()
            .with_dotted_line()
            .begins_at("cluster_vpc-1")
            .ends_at("cluster_vpc-2");

        let mut out = String::new();
        edge.render(&mut out, 2);
        assert_eq!(
            out,
            "    \"sg-1\"->\"sg-2\" [ label=\"tcp 443\" dir=none arrowhead=box style=dotted ltail=\"cluster_vpc-1\" lhead=\"cluster_vpc-2\" ] ;\n"
        );
    }

    #[test]
    fn test_render_without_attributes() {
        let mut out = String::new();
        Edge::new("a", "b").render(&mut out, 0);
        assert_eq!(out, "\"a\"->\"b\" ;\n");
    }
}
