//! Recursive existence checks and subtree search

use tracing::{debug, trace};

use crate::element::Element;
use crate::error::{Error, ErrorKind, Result};
use crate::node::Node;
use crate::pattern::Pattern;
use crate::symbol::Symbol;

/// Name of the container element returned by [`Element::find`]
pub const FOUND: &str = "found";

/// Limits and naming for bounded searches
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum element nesting depth below the search root (0 means unlimited)
    pub max_depth: u16,
    /// Name given to the result container
    pub container: Symbol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            container: Symbol::new(FOUND),
        }
    }
}

impl Config {
    /// Create a config with unlimited depth
    pub fn unlimited() -> Self {
        Self::new(0)
    }

    /// Create a config with a specific depth limit
    pub fn new(max_depth: u16) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_container(mut self, name: impl Into<Symbol>) -> Self {
        self.container = name.into();
        self
    }
}

impl Element {
    /// True if this element or any descendant content item matches `pattern`
    pub fn has(&self, pattern: impl Into<Pattern>) -> bool {
        self.has_pattern(&pattern.into())
    }

    /// Alias of [`Element::has`]
    pub fn has_element(&self, pattern: impl Into<Pattern>) -> bool {
        self.has(pattern)
    }

    /// Alias of [`Element::has`]
    pub fn includes(&self, pattern: impl Into<Pattern>) -> bool {
        self.has(pattern)
    }

    pub(crate) fn has_pattern(&self, pattern: &Pattern) -> bool {
        self.match_pattern(pattern)
            || self.contents().iter().any(|child| match child {
                Node::Element(e) => e.has_pattern(pattern),
                other => other.matches(pattern),
            })
    }

    /// Collect every matching node, self first and then each child's subtree in order
    ///
    /// The matches become the contents of a fresh `found` element; matched
    /// elements are shared handles onto the original tree.
    pub fn find(&self, pattern: impl Into<Pattern>) -> Element {
        let pattern = pattern.into();
        let mut found = Vec::new();
        self.collect_matches(&pattern, &mut found);
        trace!(pattern = %pattern, matches = found.len(), "find");
        container(Symbol::new(FOUND), found)
    }

    /// [`Element::find`] bounded by `config.max_depth`
    pub fn find_with(&self, pattern: impl Into<Pattern>, config: &Config) -> Result<Element> {
        let pattern = pattern.into();
        let mut walker = Walker::new(config, &pattern);
        walker.collect(self)?;
        trace!(pattern = %pattern, matches = walker.found.len(), "bounded find");
        Ok(container(config.container.clone(), walker.found))
    }

    /// [`Element::has`] bounded by `config.max_depth`
    pub fn has_with(&self, pattern: impl Into<Pattern>, config: &Config) -> Result<bool> {
        let pattern = pattern.into();
        Walker::new(config, &pattern).any(self)
    }

    fn collect_matches(&self, pattern: &Pattern, found: &mut Vec<Node>) {
        if self.match_pattern(pattern) {
            found.push(Node::Element(self.clone()));
        }
        for child in self.contents().iter() {
            match child {
                Node::Element(e) => e.collect_matches(pattern, found),
                other if other.matches(pattern) => found.push(other.clone()),
                _ => {}
            }
        }
    }
}

fn container(name: Symbol, found: Vec<Node>) -> Element {
    let container = Element::new(name);
    container.contents_mut().extend(found);
    container
}

/// Depth-tracking traversal shared by the bounded operations
struct Walker<'a> {
    config: &'a Config,
    pattern: &'a Pattern,
    depth: u16,
    found: Vec<Node>,
}

impl<'a> Walker<'a> {
    fn new(config: &'a Config, pattern: &'a Pattern) -> Self {
        Self {
            config,
            pattern,
            depth: 0,
            found: Vec::new(),
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth > 0 && self.depth > self.config.max_depth {
            debug!(max = self.config.max_depth, "search depth limit reached");
            return Err(Error::new(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn collect(&mut self, element: &Element) -> Result<()> {
        if element.match_pattern(self.pattern) {
            self.found.push(Node::Element(element.clone()));
        }
        for child in element.contents().iter() {
            match child {
                Node::Element(e) => {
                    self.enter()?;
                    self.collect(e)?;
                    self.exit();
                }
                other if other.matches(self.pattern) => self.found.push(other.clone()),
                _ => {}
            }
        }
        Ok(())
    }

    fn any(&mut self, element: &Element) -> Result<bool> {
        if element.match_pattern(self.pattern) {
            return Ok(true);
        }
        for child in element.contents().iter() {
            let hit = match child {
                Node::Element(e) => {
                    self.enter()?;
                    let hit = self.any(e)?;
                    self.exit();
                    hit
                }
                other => other.matches(self.pattern),
            };
            if hit {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::pcstring::PcString;

    fn deep_tree() -> Element {
        let base = Element::new("base");
        let sub = Element::new("sub");
        let deep = Element::new("deep");
        deep.append("text")
            .append(PcString::pre_escaped("&amp;"))
            .append("<");
        sub.append(deep);
        base.append(sub);
        base.append(Element::with_attributes("sub", [("attr", "value")]));
        base
    }

    #[test]
    fn test_has_aliases() {
        let e = deep_tree();
        for name in ["sub", "deep"] {
            assert!(e.has(name));
            assert!(e.has_element(name));
            assert!(e.includes(name));
        }
        assert!(!e.has("none"));
        assert!(!e.includes("none"));
        assert!(e.has(Pattern::with_attributes("sub", [("attr", "value")])));
        assert!(!e.has(Pattern::with_attributes("sub", [("attr", "value"), ("attr2", "")])));
        assert!(e.has(NodeKind::Text));
        assert!(e.has(NodeKind::PcString));
        assert!(!e.has(NodeKind::Comment));
    }

    #[test]
    fn test_has_template_with_escaped_content() {
        let e = deep_tree();

        let d = Element::new("deep");
        d.append("text").append(PcString::pre_escaped("&amp;")).append("<");
        assert!(e.has(&d));

        let d = Element::new("deep");
        d.append(PcString::pre_escaped("text"))
            .append("&")
            .append(PcString::pre_escaped("&lt;"));
        assert!(e.has(&d));
    }

    #[test]
    fn test_find_sentinel_container() {
        let e = deep_tree();
        let found = e.find("nothing");
        assert_eq!(found.name().as_str(), FOUND);
        assert!(found.attributes().is_empty());
        assert!(found.is_empty());
    }

    #[test]
    fn test_bounded_find() -> Result<()> {
        let e = deep_tree();
        let found = e.find_with("deep", &Config::new(2).with_container("hits"))?;
        assert_eq!(found.name().as_str(), "hits");
        assert_eq!(found.len(), 1);

        let err = e.find_with("deep", &Config::new(1)).err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::MaxDepthExceeded { max: 1 })
        );

        assert_eq!(e.find_with("deep", &Config::unlimited())?, e.find("deep"));
        Ok(())
    }

    #[test]
    fn test_bounded_has() -> Result<()> {
        let e = deep_tree();
        assert!(e.has_with("sub", &Config::new(1))?);
        assert!(e.has_with("deep", &Config::default())?);
        assert!(!e.has_with("none", &Config::default())?);
        assert!(e.has_with("deep", &Config::new(1)).is_err());
        Ok(())
    }
}
