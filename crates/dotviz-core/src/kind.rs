use std::str::FromStr;

use strum_macros::{Display, EnumString, IntoStaticStr};

use dotviz_error::{Error, Result};

/// The DOT keyword a graph is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Digraph,
    Graph,
    Subgraph,
}

impl GraphKind {
    /// Parse `digraph`, `graph` or `subgraph`; anything else is `InvalidGraphType`.
    pub fn parse(value: &str) -> Result<Self> {
        GraphKind::from_str(value).map_err(|err| {
            Error::invalid_graph_type(value)
                .with_operation("graph::set_type")
                .set_source(err)
        })
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Digraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotviz_error::ErrorKind;

    #[test]
    fn test_parse_accepts_the_three_keywords() {
        assert_eq!(GraphKind::parse("digraph").unwrap(), GraphKind::Digraph);
        assert_eq!(GraphKind::parse("graph").unwrap(), GraphKind::Graph);
        assert_eq!(GraphKind::parse("subgraph").unwrap(), GraphKind::Subgraph);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for value in ["fakegraph", "Digraph", "", "strict digraph"] {
            let err = GraphKind::parse(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidGraphType);
            assert_eq!(err.context_value("type"), Some(value));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GraphKind::Digraph.to_string(), "digraph");
        assert_eq!(GraphKind::Subgraph.as_str(), "subgraph");
    }
}
