//! Infrastructure vocabulary for the graph model.
//!
//! Each helper maps one concept ("security group", "cluster member") to a
//! node shape or edge decoration from the tables in [`kind`] and otherwise
//! defers to [`GraphContainer`]. No state is kept between calls.

pub mod kind;

use infradot_dot::{Arrowhead, Edge, Graph, GraphContainer, Node, SubGraph};
use infradot_error::{Error, Result};
use tracing::trace;

pub use kind::{Anchor, LinkKind, LinkStyle, ResourceKind};

/// Font size for network cluster titles.
pub const CLUSTER_FONT_SIZE: u32 = 12;

/// Add a node styled for `kind`.
pub fn add_resource<'c>(
    container: &'c mut GraphContainer,
    kind: ResourceKind,
    id: &str,
    label: &str,
) -> Result<&'c mut Node> {
    trace!("adding {} '{}'", kind, id);
    let node = container
        .add_node(id)
        .map_err(|err| err.with_context("resource", kind.as_str()))?;
    if let Some(shape) = kind.shape() {
        node.with_shape(shape);
    }
    node.with_label(label);
    Ok(node)
}

pub fn add_security_group<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::SecurityGroup, id, name)
}

/// An elastic/public address, labelled with the address itself.
pub fn add_address_binding<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    address: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::AddressBinding, id, address)
}

pub fn add_load_balancer<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::LoadBalancer, id, name)
}

pub fn add_database<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::DatabaseInstance, id, name)
}

pub fn add_route_table<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::RouteTable, id, name)
}

pub fn add_subnet<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    cidr: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::Subnet, id, cidr)
}

pub fn add_gateway<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::Gateway, id, name)
}

pub fn add_instance<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    name: &str,
) -> Result<&'c mut Node> {
    add_resource(container, ResourceKind::Instance, id, name)
}

/// A port range node labelled like `tcp/80-443`.
pub fn add_port_range<'c>(
    container: &'c mut GraphContainer,
    id: &str,
    protocol: &str,
    from_port: u16,
    to_port: u16,
) -> Result<&'c mut Node> {
    let label = port_range_label(protocol, from_port, to_port);
    add_resource(container, ResourceKind::PortRange, id, &label)
}

/// `tcp/80`, `udp/1000-2000`; protocol `-1` means every protocol.
pub fn port_range_label(protocol: &str, from_port: u16, to_port: u16) -> String {
    let protocol = if protocol == "-1" { "all" } else { protocol };
    if from_port == to_port {
        format!("{}/{}", protocol, from_port)
    } else {
        format!("{}/{}-{}", protocol, from_port, to_port)
    }
}

/// Add a `cluster_<id>` subgraph titled `label`.
pub fn add_network_cluster<'g>(graph: &'g mut Graph, id: &str, label: &str) -> &'g mut SubGraph {
    graph.create_diagram_cluster(id, label, CLUSTER_FONT_SIZE)
}

/// Connect `begin -> end` with the decorations of `kind`.
///
/// Anchored kinds need the id of the cluster the anchor points at and fail
/// with `InvalidArgument` without one.
pub fn link<'c>(
    container: &'c mut GraphContainer,
    kind: LinkKind,
    begin: &str,
    end: &str,
    cluster: Option<&str>,
) -> Result<&'c mut Edge> {
    let style = kind.style();
    let anchor = match (style.anchor, cluster) {
        (Some(anchor), Some(cluster)) => Some((anchor, cluster)),
        (Some(_), None) => {
            return Err(Error::invalid_argument(format!(
                "{} link '{}' -> '{}' needs a cluster",
                kind, begin, end
            ))
            .with_operation("facade::link"));
        }
        (None, _) => None,
    };

    let edge = if style.dedup {
        container.add_edge_ignore_dup(begin, end)
    } else {
        container.add_edge(begin, end)
    };
    if style.dotted {
        edge.with_dotted_line();
    }
    if style.no_arrow {
        edge.with_no_arrow();
    }
    match style.arrowhead {
        Some(Arrowhead::Dot) => {
            edge.with_dot();
        }
        Some(Arrowhead::Box) => {
            edge.with_box();
        }
        None => {}
    }
    match anchor {
        Some((Anchor::Tail, cluster)) => {
            edge.begins_at(cluster);
        }
        Some((Anchor::Head, cluster)) => {
            edge.ends_at(cluster);
        }
        None => {}
    }
    Ok(edge)
}

/// Dotted edge from `from` to a node inside `cluster`, clipped at the
/// cluster boundary.
pub fn connect_member<'c>(
    container: &'c mut GraphContainer,
    cluster: &str,
    from: &str,
    member: &str,
) -> Result<&'c mut Edge> {
    link(container, LinkKind::Membership, from, member, Some(cluster))
}

/// Edge from a node inside `from_cluster` to `to`, drawn from the cluster
/// boundary.
pub fn connect_clusters<'c>(
    container: &'c mut GraphContainer,
    from_cluster: &str,
    from: &str,
    to: &str,
) -> Result<&'c mut Edge> {
    link(container, LinkKind::CrossCluster, from, to, Some(from_cluster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use infradot_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn tokens(edge: &Edge) -> Vec<&str> {
        edge.attributes().iter().collect()
    }

    #[test]
    fn test_port_range_label() {
        assert_eq!(port_range_label("tcp", 443, 443), "tcp/443");
        assert_eq!(port_range_label("udp", 1000, 2000), "udp/1000-2000");
        assert_eq!(port_range_label("-1", 0, 65535), "all/0-65535");
    }

    #[test]
    fn test_port_range_has_no_shape() {
        let mut container = GraphContainer::new();
        let node = add_port_range(&mut container, "sg-1:443", "tcp", 443, 443).unwrap();
        let attrs: Vec<&str> = node.attributes().iter().collect();
        assert_eq!(attrs, vec!["label=\"tcp/443\""]);
    }

    #[test]
    fn test_resource_error_carries_kind() {
        let mut container = GraphContainer::new();
        let err = add_load_balancer(&mut container, "", "lb").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert!(err.context().contains(&("resource", "load_balancer".to_string())));
    }

    #[test]
    fn test_link_decorations() {
        let mut container = GraphContainer::new();
        let edge = connect_member(&mut container, "cluster_vpc-1", "igw-1", "sg-1").unwrap();
        assert_eq!(tokens(edge), vec!["style=dotted", "lhead=\"cluster_vpc-1\""]);

        let edge = connect_clusters(&mut container, "cluster_vpc-1", "sg-1", "db-1").unwrap();
        assert_eq!(tokens(edge), vec!["ltail=\"cluster_vpc-1\""]);

        let edge = link(&mut container, LinkKind::Route, "rtb-1", "igw-1", None).unwrap();
        assert_eq!(tokens(edge), vec!["arrowhead=box"]);

        let edge = link(&mut container, LinkKind::Association, "eip-1", "i-1", None).unwrap();
        assert_eq!(tokens(edge), vec!["dir=none"]);
    }

    #[test]
    fn test_anchored_link_needs_cluster() {
        let mut container = GraphContainer::new();
        let err = link(&mut container, LinkKind::Membership, "a", "b", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(container.edges().is_empty());
    }

    #[test]
    fn test_membership_converges_on_one_edge() {
        let mut container = GraphContainer::new();
        connect_member(&mut container, "cluster_a", "x", "y").unwrap();
        connect_member(&mut container, "cluster_a", "x", "y").unwrap();
        assert_eq!(container.edges().len(), 1);
        assert_eq!(tokens(&container.edges()[0]).len(), 4);

        link(&mut container, LinkKind::Ingress, "x", "y", None).unwrap();
        link(&mut container, LinkKind::Ingress, "x", "y", None).unwrap();
        assert_eq!(container.edges().len(), 3);
    }
}
