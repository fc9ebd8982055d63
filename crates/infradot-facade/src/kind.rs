//! Infrastructure concepts and their fixed styles.

use std::str::FromStr;

use infradot_dot::{Arrowhead, Shape};
use infradot_error::{Error, Result};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Resources that appear as nodes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    SecurityGroup,
    AddressBinding,
    LoadBalancer,
    DatabaseInstance,
    PortRange,
    RouteTable,
    Subnet,
    Gateway,
    Instance,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Parse a snake_case kind name such as `load_balancer`.
    pub fn from_name(name: &str) -> Result<Self> {
        ResourceKind::from_str(name).map_err(|_| {
            Error::unsupported(format!("unknown resource kind '{}'", name))
                .with_operation("facade::parse_resource_kind")
                .with_context("kind", name)
        })
    }

    /// Shape drawn for the resource; `None` leaves the renderer default.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            ResourceKind::SecurityGroup => Some(Shape::Box),
            ResourceKind::AddressBinding => Some(Shape::Diamond),
            ResourceKind::LoadBalancer | ResourceKind::DatabaseInstance => Some(Shape::Octagon),
            ResourceKind::PortRange => None,
            ResourceKind::RouteTable => Some(Shape::Msquare),
            ResourceKind::Subnet => Some(Shape::Parallelogram),
            ResourceKind::Gateway => Some(Shape::InvHouse),
            ResourceKind::Instance => Some(Shape::Box3d),
        }
    }
}

/// Which end of an edge is clipped at a cluster boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `ltail`: the edge leaves from the cluster.
    Tail,
    /// `lhead`: the edge enters the cluster.
    Head,
}

/// Decorations applied to an edge of a given [`LinkKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStyle {
    pub dotted: bool,
    pub no_arrow: bool,
    pub arrowhead: Option<Arrowhead>,
    pub anchor: Option<Anchor>,
    /// Reuse an existing edge between the same endpoints.
    pub dedup: bool,
}

impl LinkStyle {
    const PLAIN: LinkStyle = LinkStyle {
        dotted: false,
        no_arrow: false,
        arrowhead: None,
        anchor: None,
        dedup: false,
    };
}

/// Relationships that appear as edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LinkKind {
    /// A resource belongs to a cluster.
    Membership,
    /// Traffic from one cluster to a resource elsewhere.
    CrossCluster,
    /// Allowed inbound traffic.
    Ingress,
    /// A routing decision.
    Route,
    /// Undirected association, e.g. an address attached to an instance.
    Association,
}

impl LinkKind {
    pub fn style(&self) -> LinkStyle {
        match self {
            LinkKind::Membership => LinkStyle {
                dotted: true,
                anchor: Some(Anchor::Head),
                dedup: true,
                ..LinkStyle::PLAIN
            },
            LinkKind::CrossCluster => LinkStyle {
                anchor: Some(Anchor::Tail),
                dedup: true,
                ..LinkStyle::PLAIN
            },
            LinkKind::Ingress => LinkStyle {
                arrowhead: Some(Arrowhead::Dot),
                ..LinkStyle::PLAIN
            },
            LinkKind::Route => LinkStyle {
                arrowhead: Some(Arrowhead::Box),
                ..LinkStyle::PLAIN
            },
            LinkKind::Association => LinkStyle {
                no_arrow: true,
                dedup: true,
                ..LinkStyle::PLAIN
            },
        }
    }
}
