//! Bundled table of GraphViz attribute names.
//!
//! Answers two questions about an attribute name: which primitive type its
//! value has, and which kinds of element use it. Nothing here validates
//! attributes as they are set.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Deserialize;
use strum_macros::{Display, IntoStaticStr};

use crate::{Graph, GraphKind};
use dotviz_error::{Error, Result};

const BUNDLED_DOCUMENT: &str = include_str!("schema/attributes.toml");

static BUNDLED: LazyLock<std::result::Result<AttributeSchema, String>> = LazyLock::new(|| {
    AttributeSchema::from_toml(BUNDLED_DOCUMENT).map_err(|err| err.message().to_string())
});

/// Primitive type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    #[default]
    String,
    Boolean,
    Decimal,
}

/// Element kinds an attribute may apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    Graph,
    Subgraph,
    Cluster,
    Node,
    Edge,
}

impl ElementKind {
    /// Classify a graph; subgraphs named `cluster...` count as clusters.
    pub fn of_graph(graph: &Graph) -> Self {
        match graph.get_type() {
            GraphKind::Digraph | GraphKind::Graph => ElementKind::Graph,
            GraphKind::Subgraph if graph.name().starts_with("cluster") => ElementKind::Cluster,
            GraphKind::Subgraph => ElementKind::Subgraph,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub used_by: Vec<ElementKind>,
}

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(rename = "attribute", default)]
    attributes: Vec<AttributeSpec>,
}

/// Attribute specs keyed by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct AttributeSchema {
    specs: IndexMap<String, AttributeSpec>,
}

impl AttributeSchema {
    /// The table shipped with the crate, parsed on first use.
    pub fn bundled() -> Result<&'static AttributeSchema> {
        BUNDLED.as_ref().map_err(|message| {
            Error::deserialization_failed(message.clone()).with_operation("schema::bundled")
        })
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let document: SchemaDocument = toml::from_str(text).map_err(|err| {
            Error::deserialization_failed(err.to_string())
                .with_operation("schema::from_toml")
                .set_source(err)
        })?;

        let specs = document
            .attributes
            .into_iter()
            .map(|spec| (spec.name.to_lowercase(), spec))
            .collect::<IndexMap<_, _>>();
        tracing::debug!(attributes = specs.len(), "attribute schema loaded");

        Ok(Self { specs })
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.specs.get(&name.to_lowercase())
    }

    /// Value type of `name`; names missing from the table are strings.
    pub fn value_type(&self, name: &str) -> ValueType {
        self.get(name).map_or(ValueType::String, |spec| spec.value_type)
    }

    /// Whether `element` uses the attribute `name`, ignoring case.
    pub fn applies_to(&self, element: ElementKind, name: &str) -> bool {
        self.get(name)
            .is_some_and(|spec| spec.used_by.contains(&element))
    }

    pub fn attributes_for(&self, element: ElementKind) -> impl Iterator<Item = &AttributeSpec> {
        self.specs
            .values()
            .filter(move |spec| spec.used_by.contains(&element))
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
