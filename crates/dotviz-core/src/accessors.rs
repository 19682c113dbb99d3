//! Typed accessors for well-known DOT attributes.
//!
//! Every entry `key: Type` expands to `set_key(value: Type) -> &mut Self` and
//! `key() -> Result<&Attribute>`, both going through the regular attribute
//! map. Attributes not listed here stay reachable through
//! [`AttributesAware::set_attribute`] or [`AttributesAware::call`].

use crate::{Attribute, AttributesAware, Edge, Graph, Node};
use dotviz_error::Result;

macro_rules! typed_attributes {
    ($owner:ty { $($key:ident: $value:ty),* $(,)? }) => {
        paste::paste! {
            impl $owner {
                /// Attribute keys that have typed accessors on this type.
                pub const TYPED_ATTRIBUTES: &'static [&'static str] = &[$(stringify!($key)),*];

                $(
                    #[doc = concat!("Set the `", stringify!($key), "` attribute.")]
                    pub fn [<set_ $key>](&mut self, value: $value) -> &mut Self {
                        self.set_attribute(stringify!($key), value)
                    }

                    #[doc = concat!("The `", stringify!($key), "` attribute.")]
                    pub fn $key(&self) -> Result<&Attribute> {
                        self.attribute(stringify!($key))
                    }
                )*
            }
        }
    };
}

typed_attributes!(Graph {
    label: &str,
    rankdir: &str,
    ranksep: &str,
    nodesep: f64,
    center: bool,
    rank: &str,
    splines: &str,
    concentrate: bool,
    compound: bool,
    newrank: bool,
    bgcolor: &str,
    color: &str,
    style: &str,
    fontname: &str,
    fontsize: f64,
    fontcolor: &str,
    labelloc: &str,
    labeljust: &str,
    size: &str,
    ratio: &str,
});

typed_attributes!(Node {
    label: &str,
    xlabel: &str,
    shape: &str,
    style: &str,
    color: &str,
    fillcolor: &str,
    fontname: &str,
    fontsize: f64,
    fontcolor: &str,
    width: f64,
    height: f64,
    fixedsize: bool,
    margin: &str,
    penwidth: f64,
    peripheries: u32,
    group: &str,
    url: &str,
    tooltip: &str,
});

typed_attributes!(Edge {
    label: &str,
    xlabel: &str,
    headlabel: &str,
    taillabel: &str,
    weight: f64,
    minlen: u32,
    constraint: bool,
    color: &str,
    style: &str,
    penwidth: f64,
    arrowhead: &str,
    arrowtail: &str,
    arrowsize: f64,
    dir: &str,
    lhead: &str,
    ltail: &str,
    fontname: &str,
    fontsize: f64,
    url: &str,
    tooltip: &str,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeRef;
    use dotviz_error::ErrorKind;

    #[test]
    fn test_typed_setters_store_strings() {
        let mut node = Node::new("a");
        node.set_shape("box").set_fontsize(12.5).set_fixedsize(true);

        assert_eq!(node.shape().unwrap().value(), "box");
        assert_eq!(node.fontsize().unwrap().value(), "12.5");
        assert_eq!(node.fixedsize().unwrap().value(), "true");
    }

    #[test]
    fn test_typed_getter_on_missing_attribute() {
        let graph = Graph::new();
        let err = graph.rankdir().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeNotFound);
        assert_eq!(err.context_value("attribute"), Some("rankdir"));
    }

    #[test]
    fn test_url_renders_upper_case() {
        let mut node = Node::new("a");
        node.set_url("https://example.org");
        assert_eq!(node.to_string(), "\"a\" [\nURL=\"https://example.org\"\n]");
    }

    #[test]
    fn test_whole_number_weight() {
        let a = NodeRef::from(Node::new("a"));
        let mut edge = Edge::new(&a, &a);
        edge.set_weight(45.0).set_minlen(2);

        assert_eq!(edge.weight().unwrap().value(), "45");
        assert_eq!(edge.minlen().unwrap().value(), "2");
    }
}
