use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::escape;
use crate::{Attributes, AttributesAware, GraphAware, GraphRoot};

/// A named vertex.
#[derive(Debug, Clone, Default)]
pub struct Node {
    name: String,
    attributes: Attributes,
    graph: GraphRoot,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a node and set its `label` attribute.
    pub fn with_label(name: impl Into<String>, label: impl fmt::Display) -> Self {
        let mut node = Self::new(name);
        node.set_attribute("label", label);
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node. Graphs that already indexed it keep the old key.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }
}

impl AttributesAware for Node {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl GraphAware for Node {
    fn graph_root(&self) -> &GraphRoot {
        &self.graph
    }

    fn set_graph_root(&mut self, root: GraphRoot) {
        self.graph = root;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" [\n{}\n]",
            escape::slashes(&self.name),
            self.attributes
        )
    }
}

/// Shared handle to a [`Node`].
///
/// Graphs index nodes through this handle and edges point at the same
/// handle, so a node reached through [`crate::Graph::find_node`] is the node
/// an edge was built from. Cloning the handle does not copy the node.
#[derive(Debug, Clone)]
pub struct NodeRef(Rc<RefCell<Node>>);

impl NodeRef {
    pub fn new(node: Node) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// # Panics
    /// Panics if the node is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, Node> {
        self.0.borrow()
    }

    /// # Panics
    /// Panics if the node is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Node> {
        self.0.borrow_mut()
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Node> for NodeRef {
    fn from(node: Node) -> Self {
        NodeRef::new(node)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}
