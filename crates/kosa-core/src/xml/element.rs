//! Materialized XML element subtrees.

/// One matched element, with its attributes, direct text, and children.
///
/// The streaming reader materializes only the subtree of a matched element;
/// the rest of the document is never held in memory. `text` accumulates the
/// element's direct character data (before, between, and after children).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local element name (namespace prefix stripped).
    pub name: String,
    /// Attributes in document order, keys as written (e.g. `xml:id`).
    pub attrs: Vec<(String, String)>,
    /// Direct text content.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with the given name and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up an attribute by exact key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up the first attribute whose key ends with `suffix`.
    ///
    /// Segment identifiers are carried by `xml:id`; matching on the suffix
    /// keeps the lookup independent of the `xml` prefix spelling.
    pub fn attr_with_suffix(&self, suffix: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.ends_with(suffix))
            .map(|(_, v)| v.as_str())
    }

    /// First child with the given name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_lookup() {
        let mut elem = Element::new("seg");
        elem.attrs.push(("xml:id".into(), "seg-1.1".into()));
        elem.attrs.push(("corresp".into(), "t(a,0,3)".into()));

        assert_eq!(elem.attr("corresp"), Some("t(a,0,3)"));
        assert_eq!(elem.attr("id"), None);
        assert_eq!(elem.attr_with_suffix("id"), Some("seg-1.1"));
    }

    #[test]
    fn find_child_by_name() {
        let mut parent = Element::new("f");
        parent.children.push(Element::new("string"));
        parent.children.push(Element::new("symbol"));

        assert_eq!(parent.find_child("symbol").map(|c| c.name.as_str()), Some("symbol"));
        assert!(parent.find_child("binary").is_none());
    }
}
