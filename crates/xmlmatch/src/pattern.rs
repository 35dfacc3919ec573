//! Structural patterns and the element matcher
//!
//! A [`Pattern`] is resolved in a fixed precedence:
//!
//! 1. [`Pattern::Kind`] – the node is of the given kind
//! 2. [`Pattern::Regex`] – the expression matches the element's serialized form
//! 3. [`Pattern::Template`] – partial match against an element used as a template
//! 4. [`Pattern::Name`] – the element has this name
//! 5. [`Pattern::NameWithAttributes`] – name plus the template attribute rules
//!
//! Template matching is a subset relation: attributes and content present on
//! the element but absent from the template are ignored.

use regex::Regex;
use std::fmt;
use tracing::debug;

use crate::element::{Attributes, Element};
use crate::error::{Error, ErrorKind, Result};
use crate::node::{AttrValue, Node, NodeKind};
use crate::symbol::Symbol;
use crate::writer::WriteXml;

/// Something an element (or content item) can be matched against
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Capability tag: any node of this kind
    Kind(NodeKind),
    /// Expression tested against the element's markup
    Regex(Regex),
    /// Element used as a partial template
    Template(Element),
    /// Bare element name
    Name(Symbol),
    /// Element name plus required attributes (no content check)
    NameWithAttributes(Symbol, Attributes),
}

impl Pattern {
    /// Compile a regular expression pattern
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source).map(Self::Regex).map_err(|err| {
            debug!(source, error = %err, "rejected regex pattern");
            Error::with_message(ErrorKind::InvalidPattern, err.to_string())
        })
    }

    pub fn name(name: impl Into<Symbol>) -> Self {
        Self::Name(name.into())
    }

    pub fn with_attributes<K, V>(
        name: impl Into<Symbol>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<Symbol>,
        V: Into<AttrValue>,
    {
        Self::NameWithAttributes(
            name.into(),
            attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<NodeKind> for Pattern {
    fn from(kind: NodeKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl From<Element> for Pattern {
    fn from(template: Element) -> Self {
        Self::Template(template)
    }
}

impl From<&Element> for Pattern {
    fn from(template: &Element) -> Self {
        Self::Template(template.clone())
    }
}

impl From<Symbol> for Pattern {
    fn from(name: Symbol) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for Pattern {
    fn from(name: &str) -> Self {
        Self::Name(Symbol::new(name))
    }
}

impl From<String> for Pattern {
    fn from(name: String) -> Self {
        Self::Name(Symbol::from(name))
    }
}

impl From<&Self> for Pattern {
    fn from(pattern: &Self) -> Self {
        pattern.clone()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "any {kind:?}"),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
            Self::Template(template) => f.write_str(&template.to_xml()),
            Self::Name(name) => write!(f, "{name}"),
            Self::NameWithAttributes(name, attributes) => {
                write!(f, "{name} {{")?;
                for (i, (key, value)) in attributes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match value.text_form() {
                        Some(text) => write!(f, "{key}='{text}'")?,
                        None => write!(f, "{key}=nil")?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl Element {
    /// Test this element (not its descendants) against `pattern`
    pub fn matches(&self, pattern: impl Into<Pattern>) -> bool {
        self.match_pattern(&pattern.into())
    }

    /// Like [`Element::matches`], optionally extending the test to every descendant
    pub fn matches_with(&self, pattern: impl Into<Pattern>, recursive: bool) -> bool {
        let pattern = pattern.into();
        if recursive {
            self.has_pattern(&pattern)
        } else {
            self.match_pattern(&pattern)
        }
    }

    /// Boolean alias of [`Element::matches`]
    pub fn is_match(&self, pattern: impl Into<Pattern>) -> bool {
        self.matches(pattern)
    }

    pub(crate) fn match_pattern(&self, pattern: &Pattern) -> bool {
        match pattern {
            Pattern::Kind(kind) => *kind == NodeKind::Element,
            Pattern::Regex(re) => re.is_match(&self.to_xml()),
            Pattern::Template(template) => self.match_template(template),
            Pattern::Name(name) => self.name() == name,
            Pattern::NameWithAttributes(name, attributes) => {
                self.name() == name && attributes_match(&self.attributes(), attributes)
            }
        }
    }

    fn match_template(&self, template: &Element) -> bool {
        self.name() == template.name()
            && attributes_match(&self.attributes(), &template.attributes())
            && contents_match(&self.contents(), &template.contents())
    }
}

impl Node {
    /// Content items other than elements only answer to kind patterns
    pub fn matches(&self, pattern: &Pattern) -> bool {
        match (self, pattern) {
            (Self::Element(e), _) => e.match_pattern(pattern),
            (_, Pattern::Kind(kind)) => self.kind() == *kind,
            _ => false,
        }
    }
}

fn attributes_match(actual: &Attributes, wanted: &Attributes) -> bool {
    wanted
        .iter()
        .all(|(key, expected)| attribute_matches(actual.get(key), expected))
}

fn attribute_matches(actual: Option<&AttrValue>, expected: &AttrValue) -> bool {
    let Some(actual) = actual else {
        return false;
    };

    match expected {
        AttrValue::Nil => actual.is_nil(),
        AttrValue::Regex(re) => actual.text_form().is_some_and(|text| re.is_match(&text)),
        _ => match (actual.to_pcstring(), expected.to_pcstring()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Every template item must be satisfied by at least one child; children may be reused
fn contents_match(actual: &[Node], wanted: &[Node]) -> bool {
    wanted
        .iter()
        .all(|item| actual.iter().any(|child| content_item_matches(child, item)))
}

fn content_item_matches(child: &Node, item: &Node) -> bool {
    match item {
        Node::Element(template) => child
            .as_element()
            .is_some_and(|e| e.match_template(template)),
        Node::Regex(re) => child.text_form().is_some_and(|text| re.is_match(text)),
        Node::Comment(comment) => matches!(child, Node::Comment(c) if c == comment),
        Node::Text(_) | Node::Symbol(_) | Node::PcString(_) => {
            match (child.to_pcstring(), item.to_pcstring()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcstring::PcString;

    fn tag() -> Element {
        Element::with_attributes("tag", [("attr", "value")])
    }

    fn re(source: &str) -> Result<Regex> {
        Regex::new(source).map_err(|e| Error::with_message(ErrorKind::InvalidPattern, e.to_string()))
    }

    #[test]
    fn test_name_and_attribute_patterns() -> Result<()> {
        let e = tag();
        assert!(e.matches("tag"));
        assert!(e.matches(Pattern::with_attributes("tag", [("attr", "value")])));
        assert!(!e.matches("t"));
        assert!(!e.matches(Pattern::with_attributes("tag", [("attr2", "value")])));
        assert!(!e.matches(Pattern::with_attributes("tag", [("attr", "value2")])));
        assert!(e.matches(Pattern::with_attributes("tag", [("attr", re("val")?)])));
        Ok(())
    }

    #[test]
    fn test_template_attributes() -> Result<()> {
        let e = tag();
        assert!(e.matches(Element::new("tag")));
        assert!(e.matches(tag()));
        assert!(e.matches(Element::with_attributes("tag", [("attr", re("alu")?)])));
        assert!(!e.matches(Element::new("t")));
        assert!(!e.matches(Element::with_attributes("tag", [("attr2", "value")])));
        assert!(!e.matches(Element::with_attributes("tag", [("attr", "value2")])));
        assert!(!e.matches(Element::with_attributes("tag", [("attr", re("aul")?)])));
        assert!(e.matches(Element::with_attributes("tag", [("attr", PcString::new("value"))])));

        let pcs = Element::with_attributes("tag", [("attr", PcString::new("value"))]);
        assert!(pcs.matches(&e));
        Ok(())
    }

    #[test]
    fn test_nil_attribute_requires_present_nil() {
        let e = tag();
        assert!(!e.matches(Element::with_attributes("tag", [("attr", AttrValue::Nil)])));
        assert!(!e.matches(Element::with_attributes("tag", [("nonattr", AttrValue::Nil)])));

        let with_nil = Element::with_attributes("tag", [("nonattr", AttrValue::Nil)]);
        assert!(with_nil.matches(Element::with_attributes("tag", [("nonattr", AttrValue::Nil)])));
    }

    #[test]
    fn test_regex_against_markup() -> Result<()> {
        let e = tag();
        assert!(e.matches(Pattern::regex("ag")?));
        assert!(!e.matches(Pattern::regex("elem")?));

        let el = Element::new("el");
        el.append("text");
        assert!(el.matches(Pattern::regex("el>te")?));
        assert!(!el.matches(Pattern::regex("^text$")?));
        Ok(())
    }

    #[test]
    fn test_kind_patterns() {
        let e = tag();
        assert!(e.matches(NodeKind::Element));
        assert!(!e.matches(NodeKind::Text));
        assert!(!e.matches(NodeKind::Comment));
    }

    #[test]
    fn test_template_contents() -> Result<()> {
        let e = Element::new("element");
        e.append(Element::new("sub"));
        e.append("text");

        let with = |content: Node| {
            let t = Element::new("element");
            t.append(content);
            t
        };

        assert!(e.matches(with(Element::new("sub").into())));
        assert!(!e.matches(with(Element::new("other").into())));
        assert!(e.matches(with("text".into())));
        assert!(!e.matches(with("other".into())));
        assert!(e.matches(with(re("ex")?.into())));
        assert!(!e.matches(with(re("th")?.into())));
        assert!(!e.matches(with(re("sub")?.into())));
        Ok(())
    }

    #[test]
    fn test_regex_items_test_every_text_like_child() -> Result<()> {
        let with = |child: Node| {
            let e = Element::new("el");
            e.append(child);
            e
        };
        let t = Element::new("el");
        t.append(re("^a&b$")?);

        assert!(with("a&b".into()).matches(&t));
        assert!(with(Symbol::new("a&b").into()).matches(&t));
        assert!(with(PcString::new("a&b").into()).matches(&t));
        assert!(!with(PcString::pre_escaped("a&amp;b").into()).matches(&t));
        assert!(!with(Element::new("a&b").into()).matches(&t));

        let by_note = Element::new("el");
        by_note.append(re("note")?);
        let commented = Element::new("el");
        commented.append(crate::comment::Comment::new("note")?);
        assert!(!commented.matches(&by_note));
        Ok(())
    }

    #[test]
    fn test_template_contents_are_not_consumed() {
        let e = Element::new("el");
        e.append("a");

        let t = Element::new("el");
        t.append("a").append("a");
        assert!(e.matches(&t));
    }

    #[test]
    fn test_escaped_attribute_values() {
        let e = Element::with_attributes("t", [("a", "&")]);
        assert!(e.matches(Element::with_attributes("t", [("a", "&")])));
        assert!(e.matches(Element::with_attributes("t", [("a", PcString::pre_escaped("&amp;"))])));
        assert!(e.matches(Element::with_attributes("t", [("a", PcString::new("&"))])));
    }

    #[test]
    fn test_matches_with_recursive() {
        let e = Element::new("base");
        e.append(Element::new("sub"));
        assert!(!e.matches_with("sub", false));
        assert!(e.matches_with("sub", true));
        assert!(e.is_match("base"));
    }

    #[test]
    fn test_invalid_regex() {
        let err = Pattern::regex("(unclosed").err();
        assert_eq!(err.map(|e| e.kind().clone()), Some(ErrorKind::InvalidPattern));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::name("sub").to_string(), "sub");
        assert_eq!(
            Pattern::with_attributes("sub", [("attr", "value")]).to_string(),
            "sub {attr='value'}"
        );
        assert_eq!(Pattern::from(NodeKind::Text).to_string(), "any Text");
    }
}
