use infradot_dot::{Graph, Shape};
use infradot_error::ErrorKind;
use pretty_assertions::assert_eq;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn each_node_renders_one_statement() {
    for id in ["i-0abc", "10.0.0.1", "web server", "sg/\"quoted\""] {
        let mut graph = Graph::new();
        graph.add_node(id).expect("valid id");
        let dot = graph.to_dot();

        let quoted = format!("\"{}\"", infradot_recorder::escape_label(id));
        assert_eq!(count(&dot, &quoted), 1, "{dot}");
        assert_eq!(count(&dot, " ;\n"), 1, "{dot}");
    }
}

#[test]
fn empty_node_id_is_invalid() {
    let mut graph = Graph::new();
    let err = graph.add_node("").expect_err("empty id");
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);

    let cluster = graph.create_diagram_cluster("vpc-1", "vpc-1", 12);
    let err = cluster.add_node(String::new()).expect_err("empty id");
    assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
}

#[test]
fn duplicate_edges() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b").with_label("one");
    graph.add_edge("a", "b").with_label("two");
    graph.add_edge_ignore_dup("c", "d").with_label("three");
    graph.add_edge_ignore_dup("c", "d").with_dot();

    let dot = graph.to_dot();
    assert_eq!(count(&dot, "\"a\"->\"b\""), 2);
    assert_eq!(count(&dot, "\"c\"->\"d\""), 1);
    assert!(dot.contains("\"c\"->\"d\" [ label=\"three\" arrowhead=dot ] ;"));
}

#[test]
fn node_label_accumulates() {
    let mut graph = Graph::new();
    graph.add_node("n").expect("node").with_label("x").with_label("x");
    assert_eq!(count(&graph.to_dot(), "label=\"x\""), 2);
}

#[test]
fn cluster_round_trip() {
    let mut graph = Graph::new();
    {
        let cluster = graph.create_diagram_cluster("vpc-1", "vpc-1", 12);
        cluster
            .add_node("sg-1")
            .expect("node")
            .with_shape(Shape::Box)
            .with_label("web-sg");
    }
    graph
        .add_node("eip-1")
        .expect("node")
        .with_shape(Shape::Diamond)
        .with_label("1.2.3.4");
    graph.add_edge("sg-1", "eip-1").begins_at("cluster_vpc-1");

    let expected = "\
digraph G {
  compound=true
  \"eip-1\" [ shape=diamond label=\"1.2.3.4\" ] ;
  \"sg-1\"->\"eip-1\" [ ltail=\"cluster_vpc-1\" ] ;
  subgraph \"cluster_vpc-1\" {
    label=\"vpc-1\"
    fontsize = 12
    \"sg-1\" [ shape=box label=\"web-sg\" ] ;
  }
}
";
    assert_eq!(graph.to_dot(), expected);
}
