//! In-memory GraphViz graphs and their DOT serialization.
//!
//! Build a [`Graph`] by registering [`Node`]s, linking [`Edge`]s between
//! them and nesting subgraphs; every element carries ordered
//! [`Attributes`]. `Display` on any element produces its DOT text.
//!
//! # Module Structure
//!
//! - [`escape`]: quoting rules for names and attribute values
//! - [`schema`]: bundled attribute name table (value types, users)
//!
//! ```rust
//! use dotviz_core::{AttributesAware, Edge, Graph, Node, NodeRef};
//!
//! let mut graph = Graph::create("G", true);
//! let a = NodeRef::from(Node::new("a"));
//! let b = NodeRef::from(Node::new("b"));
//! graph.set_node(a.clone()).set_node(b.clone());
//!
//! let mut edge = Edge::new(&a, &b);
//! edge.set_attribute("label", "a to b");
//! graph.link(edge);
//!
//! assert!(graph.to_string().contains("\"a\" -> \"b\""));
//! ```

mod accessors;
mod attribute;
mod attributes;
mod edge;
pub mod escape;
mod graph;
mod kind;
mod node;
mod root;
pub mod schema;

pub use attribute::Attribute;
pub use attributes::{Accessor, Attributes, AttributesAware, Dispatch};
pub use edge::Edge;
pub use graph::Graph;
pub use kind::GraphKind;
pub use node::{Node, NodeRef};
pub use root::{GraphAware, GraphRoot};
pub use schema::{AttributeSchema, AttributeSpec, ElementKind, ValueType};

pub use dotviz_error::{Error, ErrorKind, Result};
