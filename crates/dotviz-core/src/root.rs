//! Non-owning back references from nodes and edges to their graph.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::GraphKind;

/// Shared state of a graph that its elements may observe.
///
/// A subgraph also remembers the graph it was added to, so that edges inside
/// it can tell whether the enclosing graph is directed.
#[derive(Debug)]
pub(crate) struct GraphHeader {
    kind: Cell<GraphKind>,
    parent: RefCell<Weak<GraphHeader>>,
}

impl GraphHeader {
    pub(crate) fn new(kind: GraphKind) -> Self {
        Self {
            kind: Cell::new(kind),
            parent: RefCell::new(Weak::new()),
        }
    }

    pub(crate) fn kind(&self) -> GraphKind {
        self.kind.get()
    }

    pub(crate) fn set_kind(&self, kind: GraphKind) {
        self.kind.set(kind);
    }

    pub(crate) fn set_parent(&self, parent: &Rc<GraphHeader>) {
        *self.parent.borrow_mut() = Rc::downgrade(parent);
    }

    fn is_directed(&self) -> bool {
        match self.kind.get() {
            GraphKind::Digraph => true,
            GraphKind::Graph => false,
            GraphKind::Subgraph => self
                .parent
                .borrow()
                .upgrade()
                .is_some_and(|parent| parent.is_directed()),
        }
    }
}

/// Handle to the graph an element was registered on.
///
/// Holds no ownership: once the graph is dropped the handle reads as
/// detached.
#[derive(Debug, Clone, Default)]
pub struct GraphRoot(Weak<GraphHeader>);

impl GraphRoot {
    pub(crate) fn new(header: &Rc<GraphHeader>) -> Self {
        Self(Rc::downgrade(header))
    }

    /// A handle that belongs to no graph.
    pub fn detached() -> Self {
        Self::default()
    }

    /// The owning graph's current type, if the graph is still alive.
    pub fn kind(&self) -> Option<GraphKind> {
        self.0.upgrade().map(|header| header.kind())
    }

    pub fn is_attached(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Whether edges under this graph use `->`.
    ///
    /// Detached elements and subgraphs without a directed ancestor are
    /// undirected.
    pub fn is_directed(&self) -> bool {
        self.0.upgrade().is_some_and(|header| header.is_directed())
    }
}

/// Elements that know which graph they were registered on.
pub trait GraphAware {
    fn graph_root(&self) -> &GraphRoot;

    fn set_graph_root(&mut self, root: GraphRoot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_root() {
        let root = GraphRoot::detached();
        assert!(!root.is_attached());
        assert_eq!(root.kind(), None);
        assert!(!root.is_directed());
    }

    #[test]
    fn test_root_follows_kind_changes() {
        let header = Rc::new(GraphHeader::new(GraphKind::Digraph));
        let root = GraphRoot::new(&header);
        assert!(root.is_directed());

        header.set_kind(GraphKind::Graph);
        assert_eq!(root.kind(), Some(GraphKind::Graph));
        assert!(!root.is_directed());

        drop(header);
        assert!(!root.is_attached());
    }

    #[test]
    fn test_subgraph_inherits_direction() {
        let parent = Rc::new(GraphHeader::new(GraphKind::Digraph));
        let child = Rc::new(GraphHeader::new(GraphKind::Subgraph));
        let root = GraphRoot::new(&child);
        assert!(!root.is_directed());

        child.set_parent(&parent);
        assert!(root.is_directed());

        parent.set_kind(GraphKind::Graph);
        assert!(!root.is_directed());
    }
}
