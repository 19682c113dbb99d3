//! Graphs and subgraphs.
//!
//! A [`Graph`] owns its attributes, nodes, edges and subgraphs. Nodes and
//! subgraphs are indexed by name with insert-or-replace semantics; edges are
//! kept in link order and may repeat.
//!
//! Rendering emits, in this order: subgraphs, own attributes, edges, nodes.
//!
//! ```text
//! strict digraph "G" {
//! subgraph "cluster_a" {
//! ...
//! }
//! label="My Graph"
//! "a" -> "b" [
//!
//! ]
//! "a" [
//!
//! ]
//! }
//! ```

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::root::GraphHeader;
use crate::{Attributes, AttributesAware, Edge, GraphAware, GraphKind, GraphRoot, NodeRef};
use dotviz_error::{Error, Result};

#[derive(Debug)]
pub struct Graph {
    name: String,
    header: Rc<GraphHeader>,
    strict: bool,
    path: String,
    attributes: Attributes,
    nodes: IndexMap<String, NodeRef>,
    edges: Vec<Edge>,
    graphs: IndexMap<String, Graph>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
            header: Rc::new(GraphHeader::new(GraphKind::Digraph)),
            strict: false,
            path: String::new(),
            attributes: Attributes::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            graphs: IndexMap::new(),
        }
    }
}

impl Graph {
    /// An empty digraph named `G`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A `digraph` when `directed`, a plain `graph` otherwise.
    pub fn create(name: impl Into<String>, directed: bool) -> Self {
        let mut graph = Self::new();
        graph.set_name(name).set_kind(if directed {
            GraphKind::Digraph
        } else {
            GraphKind::Graph
        });
        graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix a subgraph name with `cluster` to have the renderer draw a
    /// border around it.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn get_type(&self) -> GraphKind {
        self.header.kind()
    }

    /// Set the type from its DOT keyword; fails with `InvalidGraphType`
    /// for anything but `digraph`, `graph` or `subgraph`.
    pub fn set_type(&mut self, value: &str) -> Result<&mut Self> {
        let kind = GraphKind::parse(value)?;
        Ok(self.set_kind(kind))
    }

    pub fn set_kind(&mut self, kind: GraphKind) -> &mut Self {
        self.header.set_kind(kind);
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Handle given to nodes and edges registered on this graph.
    pub fn root(&self) -> GraphRoot {
        GraphRoot::new(&self.header)
    }

    /// Add a subgraph, forcing its type to `subgraph`.
    ///
    /// A previous subgraph with the same name is replaced.
    pub fn add_graph(&mut self, graph: Graph) -> &mut Self {
        graph.header.set_kind(GraphKind::Subgraph);
        graph.header.set_parent(&self.header);

        tracing::debug!(graph = %self.name, subgraph = %graph.name, "add subgraph");
        if let Some(previous) = self.graphs.insert(graph.name.clone(), graph) {
            tracing::trace!(subgraph = %previous.name, "subgraph replaced");
        }
        self
    }

    pub fn has_graph(&self, name: &str) -> bool {
        self.graphs.contains_key(name)
    }

    pub fn get_graph(&self, name: &str) -> Result<&Graph> {
        self.graphs
            .get(name)
            .ok_or_else(|| Error::graph_not_found(name).with_operation("graph::get_graph"))
    }

    pub fn get_graph_mut(&mut self, name: &str) -> Result<&mut Graph> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| Error::graph_not_found(name).with_operation("graph::get_graph"))
    }

    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.values()
    }

    /// Register a node under its name, taking ownership of it.
    ///
    /// A previous node with the same name is replaced, not merged.
    pub fn set_node(&mut self, node: impl Into<NodeRef>) -> &mut Self {
        let node = node.into();
        node.borrow_mut().set_graph_root(self.root());

        let name = node.name();
        tracing::debug!(graph = %self.name, node = %name, "set node");
        if self.nodes.insert(name, node).is_some() {
            tracing::trace!(graph = %self.name, "node replaced");
        }
        self
    }

    /// Store a node under an arbitrary name, without claiming ownership.
    pub fn bind_node(&mut self, name: impl Into<String>, node: impl Into<NodeRef>) -> &mut Self {
        self.nodes.insert(name.into(), node.into());
        self
    }

    /// Look up a node in this graph's own index.
    pub fn node(&self, name: &str) -> Option<NodeRef> {
        self.nodes.get(name).cloned()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeRef> {
        self.nodes.values()
    }

    /// Find a node here or, depth first, in any subgraph.
    pub fn find_node(&self, name: &str) -> Option<NodeRef> {
        if let Some(node) = self.nodes.get(name) {
            return Some(node.clone());
        }

        self.graphs.values().find_map(|graph| graph.find_node(name))
    }

    /// Append an edge; duplicates are kept.
    pub fn link(&mut self, mut edge: Edge) -> &mut Self {
        edge.set_graph_root(self.root());
        tracing::debug!(
            graph = %self.name,
            from = %edge.from().name(),
            to = %edge.to().name(),
            "link"
        );
        self.edges.push(edge);
        self
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Directory prefix for the `dot` executable, with a trailing separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Record the directory holding the `dot` executable.
    ///
    /// The path is only accepted when it is already canonical (absolute,
    /// no symlinks or `..`); otherwise it is ignored.
    pub fn set_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        let canonical = path.canonicalize().ok();

        if !path.as_os_str().is_empty()
            && canonical.as_deref().map(Path::as_os_str) == Some(path.as_os_str())
        {
            self.path = format!("{}{}", path.display(), MAIN_SEPARATOR);
        } else {
            tracing::warn!(path = %path.display(), "ignoring non-canonical dot path");
        }
        self
    }
}

impl AttributesAware for Graph {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<String> = Vec::with_capacity(
            self.graphs.len() + self.attributes.len() + self.edges.len() + self.nodes.len(),
        );
        elements.extend(self.graphs.values().map(ToString::to_string));
        elements.extend(self.attributes.iter().map(ToString::to_string));
        elements.extend(self.edges.iter().map(ToString::to_string));
        elements.extend(self.nodes.values().map(ToString::to_string));

        let strict = if self.strict { "strict " } else { "" };
        write!(
            f,
            "{}{} \"{}\" {{\n{}\n}}",
            strict,
            self.get_type(),
            self.name,
            elements.join("\n")
        )
    }
}
