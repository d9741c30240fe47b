//! Tag-path patterns for the streaming reader.

/// A suffix-matchable path of element names, e.g. `"seg/fs"` or `"p/s"`.
///
/// A pattern matches when the trailing entries of the open-element stack
/// line up with its components. Each component matches an element whose
/// name *ends with* the component text, mirroring the `.*name` tag
/// specifications of the reference corpus reader; `TagPath::parse` therefore
/// also accepts the spelled-out forms `".*/seg/fs"` and `".*p/.*s"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPath {
    components: Vec<String>,
}

impl TagPath {
    /// Parse a pattern. Leading ancestor wildcards (`.*` or `…`) and `.*`
    /// component prefixes are stripped; empty components are ignored.
    pub fn parse(pattern: &str) -> Self {
        let components = pattern
            .split('/')
            .map(|c| c.trim_start_matches(".*").trim_start_matches('…'))
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Self { components }
    }

    /// Number of components in the pattern.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Does the open-element stack (innermost element last) match?
    pub fn matches(&self, stack: &[String]) -> bool {
        if self.components.is_empty() || stack.len() < self.components.len() {
            return false;
        }
        stack
            .iter()
            .rev()
            .zip(self.components.iter().rev())
            .all(|(name, component)| name.ends_with(component.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn parse_plain_pattern() {
        let path = TagPath::parse("seg/fs");
        assert_eq!(path.depth(), 2);
        assert!(path.matches(&stack(&["teiCorpus", "body", "seg", "fs"])));
    }

    #[test]
    fn parse_wildcard_prefix_forms() {
        assert_eq!(TagPath::parse(".*/seg/fs"), TagPath::parse("seg/fs"));
        assert_eq!(TagPath::parse("…/seg/fs"), TagPath::parse("seg/fs"));
        assert_eq!(TagPath::parse(".*p/.*s"), TagPath::parse("p/s"));
    }

    #[test]
    fn matches_only_as_suffix() {
        let path = TagPath::parse("seg/fs");
        assert!(!path.matches(&stack(&["seg", "fs", "f"])));
        assert!(!path.matches(&stack(&["fs"])));
        assert!(!path.matches(&stack(&["fs", "seg"])));
    }

    #[test]
    fn component_matches_name_suffix() {
        let path = TagPath::parse("p/s");
        assert!(path.matches(&stack(&["text", "p", "s"])));
        // "sp" ends with "p", "fs" ends with "s": suffix semantics.
        assert!(path.matches(&stack(&["sp", "fs"])));
        assert!(!path.matches(&stack(&["p", "t"])));
    }

    #[test]
    fn empty_pattern_never_matches() {
        let path = TagPath::parse("");
        assert!(!path.matches(&stack(&["a"])));
        assert!(!path.matches(&[]));
    }
}
