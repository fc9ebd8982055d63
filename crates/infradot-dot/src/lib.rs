//! Graph object model rendering to DOT text.
//!
//! A [`Graph`] owns root-level nodes and edges plus a list of one-level
//! [`SubGraph`] clusters. Everything is built up front through append-only
//! setters and then written to a [`Recorder`](infradot_recorder::Recorder)
//! with [`Graph::render`]:
//!
//! ```text
//! digraph G {
//!   compound=true
//!   "<id>" [ <attrs> ] ;
//!   "<begin>"->"<end>" [ <attrs> ] ;
//!   subgraph "<id>" {
//!     ...
//!   }
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`attrs`]: append-only attribute bags
//! - [`shape`]: node shapes and their tokens
//! - [`node`], [`edge`]: graph elements
//! - [`container`]: node/edge aggregate shared by graph and clusters
//! - [`graph`]: root graph and clusters

pub mod attrs;
pub mod container;
pub mod edge;
pub mod graph;
pub mod node;
pub mod shape;

pub use attrs::{Arrowhead, Attributes};
pub use container::GraphContainer;
pub use edge::Edge;
pub use graph::{CLUSTER_PREFIX, Graph, SubGraph, TITLE_FONT_SIZE};
pub use node::Node;
pub use shape::Shape;
