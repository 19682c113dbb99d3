use std::fmt;

use crate::escape;

/// A single `key=value` pair of a graph, node or edge.
///
/// The value is stored verbatim; escaping happens when the attribute is
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key = key.into();
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// Whether the value carries a backslash and needs escape-aware quoting.
    pub fn is_value_containing_specials(&self) -> bool {
        escape::contains_specials(&self.value)
    }

    /// Whether the value is an HTML-like label.
    pub fn is_value_in_html(&self) -> bool {
        escape::is_html(&self.value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key == "url" { "URL" } else { self.key.as_str() };

        if self.is_value_containing_specials() {
            write!(f, "{}=\"{}\"", key, escape::specials(&self.value))
        } else if !self.is_value_in_html() {
            write!(f, "{}=\"{}\"", key, escape::slashes(&self.value))
        } else {
            write!(f, "{}={}", key, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_are_fluent() {
        let mut attr = Attribute::new("a", "1");
        attr.set_key("b").set_value("2");
        assert_eq!(attr.key(), "b");
        assert_eq!(attr.value(), "2");
    }

    #[test]
    fn test_to_string() {
        let mut attr = Attribute::new("a", "b");
        assert_eq!(attr.to_string(), "a=\"b\"");

        attr.set_value("a\"a");
        assert_eq!(attr.to_string(), "a=\"a\\\"a\"");

        attr.set_key("url");
        assert_eq!(attr.to_string(), "URL=\"a\\\"a\"");
    }

    #[test]
    fn test_url_mapping_is_case_sensitive() {
        assert_eq!(Attribute::new("Url", "x").to_string(), "Url=\"x\"");
        assert_eq!(Attribute::new("URL", "x").to_string(), "URL=\"x\"");
    }

    #[test]
    fn test_html_value_is_not_quoted() {
        let attr = Attribute::new("label", "<<b>bold</b> \"text\">");
        assert!(attr.is_value_in_html());
        assert_eq!(attr.to_string(), "label=<<b>bold</b> \"text\">");
    }

    #[test]
    fn test_empty_value_is_quoted() {
        let attr = Attribute::new("label", "");
        assert!(!attr.is_value_in_html());
        assert_eq!(attr.to_string(), "label=\"\"");
    }

    #[test]
    fn test_specials() {
        let attr = Attribute::new("label", "+ name : string\\l+ home_country : string\\l");
        assert!(attr.is_value_containing_specials());
        assert_eq!(
            attr.to_string(),
            "label=\"+ name : string\\l+ home_country : string\\l\""
        );

        let attr = Attribute::new("label", "+ ship(): boolean");
        assert!(!attr.is_value_containing_specials());
    }

    #[test]
    fn test_specials_win_over_html() {
        let attr = Attribute::new("label", "<a\\lb>");
        assert_eq!(attr.to_string(), "label=\"<a\\lb>\"");
    }
}
