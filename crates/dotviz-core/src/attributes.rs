//! Ordered attribute storage shared by graphs, nodes and edges.

use std::fmt;

use indexmap::IndexMap;

use crate::Attribute;
use dotviz_error::{Error, Result};

/// Insertion-ordered map from key to [`Attribute`], one entry per key.
///
/// Setting an existing key replaces the attribute in place, keeping its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let attribute = Attribute::new(name.as_str(), value);
        if let Some(previous) = self.entries.insert(name, attribute) {
            tracing::trace!(key = previous.key(), "attribute replaced");
        }
    }

    pub fn get(&self, name: &str) -> Result<&Attribute> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::attribute_not_found(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Attribute> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| Error::attribute_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One attribute per line, in insertion order.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.entries.values().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}

/// A `getX` / `setX` style accessor name resolved to an attribute key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    Get(String),
    Set(String),
}

impl Accessor {
    /// Parse a method name such as `setFontSize` into `Set("fontSize")`.
    ///
    /// The `get`/`set` prefix is matched case-sensitively and only the first
    /// letter of the remainder is lower-cased. Any other name yields `None`.
    pub fn parse(method: &str) -> Option<Self> {
        if let Some(rest) = method.strip_prefix("set") {
            return Some(Accessor::Set(lower_first(rest)));
        }
        if let Some(rest) = method.strip_prefix("get") {
            return Some(Accessor::Get(lower_first(rest)));
        }
        None
    }

    pub fn key(&self) -> &str {
        match self {
            Accessor::Get(key) | Accessor::Set(key) => key,
        }
    }
}

fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of [`AttributesAware::call`].
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// A `setX` call stored its value.
    Set,
    /// A `getX` call found its attribute.
    Get(&'a Attribute),
    /// The method name was neither a getter nor a setter.
    Ignored,
}

/// Attribute access for anything that owns an [`Attributes`] map.
pub trait AttributesAware {
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Store `value` under `name`, replacing any previous attribute.
    fn set_attribute(&mut self, name: impl Into<String>, value: impl fmt::Display) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().set(name, value.to_string());
        self
    }

    /// Fails with `AttributeNotFound` when `name` was never set.
    fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.attributes().get(name)
    }

    fn attribute_mut(&mut self, name: &str) -> Result<&mut Attribute> {
        self.attributes_mut().get_mut(name)
    }

    /// Dispatch a `getX` / `setX` method name to the attribute map.
    ///
    /// A setter without a value is an `InvalidArgument` error.
    fn call(&mut self, method: &str, value: Option<&str>) -> Result<Dispatch<'_>>
    where
        Self: Sized,
    {
        match Accessor::parse(method) {
            Some(Accessor::Set(key)) => {
                let value = value.ok_or_else(|| {
                    Error::invalid_argument(format!("'{method}' expects a value"))
                        .with_operation("attributes::call")
                })?;
                self.set_attribute(key, value);
                Ok(Dispatch::Set)
            }
            Some(Accessor::Get(key)) => self.attribute(&key).map(Dispatch::Get),
            None => Ok(Dispatch::Ignored),
        }
    }
}
