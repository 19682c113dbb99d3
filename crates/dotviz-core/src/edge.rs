use std::fmt;

use crate::escape;
use crate::{Attributes, AttributesAware, GraphAware, GraphRoot, NodeRef};

/// A connection between two nodes.
///
/// Whether it renders as `->` or `--` is decided by the graph it is linked
/// on, at render time. An edge that was never linked renders as `--`.
/// Subgraphs have no direction of their own: an edge linked on one follows
/// the nearest enclosing `digraph` or `graph`.
#[derive(Debug, Clone)]
pub struct Edge {
    from: NodeRef,
    to: NodeRef,
    attributes: Attributes,
    graph: GraphRoot,
}

impl Edge {
    pub fn new(from: &NodeRef, to: &NodeRef) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            attributes: Attributes::new(),
            graph: GraphRoot::detached(),
        }
    }

    pub fn from(&self) -> &NodeRef {
        &self.from
    }

    pub fn to(&self) -> &NodeRef {
        &self.to
    }

    /// `->` on a directed graph, `--` otherwise.
    pub fn glyph(&self) -> &'static str {
        if self.graph.is_directed() { "->" } else { "--" }
    }
}

impl AttributesAware for Edge {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl GraphAware for Edge {
    fn graph_root(&self) -> &GraphRoot {
        &self.graph
    }

    fn set_graph_root(&mut self, root: GraphRoot) {
        self.graph = root;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {} \"{}\" [\n{}\n]",
            escape::slashes(&self.from.name()),
            self.glyph(),
            escape::slashes(&self.to.name()),
            self.attributes
        )
    }
}
