//! Content items and attribute values

use regex::Regex;
use std::borrow::Cow;

use crate::comment::Comment;
use crate::element::Element;
use crate::pcstring::{encode, PcString};
use crate::symbol::Symbol;

/// Capability tag of a content item, used by kind patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Symbol,
    PcString,
    Comment,
    Regex,
}

/// A child of an [`Element`]
#[derive(Clone, Debug)]
pub enum Node {
    /// Nested element (shares storage with the appended handle)
    Element(Element),
    /// Plain text, escaped on output
    Text(String),
    /// Symbolic atom, written as its escaped name
    Symbol(Symbol),
    /// Escaped-string value
    PcString(PcString),
    /// Comment
    Comment(Comment),
    /// Regular expression; only meaningful inside templates
    Regex(Regex),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::Symbol(_) => NodeKind::Symbol,
            Self::PcString(_) => NodeKind::PcString,
            Self::Comment(_) => NodeKind::Comment,
            Self::Regex(_) => NodeKind::Regex,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Source text of a text-like item (text, symbol or escaped string)
    pub fn text_form(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Symbol(sym) => Some(sym.as_str()),
            Self::PcString(pcs) => Some(pcs.source_text()),
            _ => None,
        }
    }

    /// Text-like item coerced to an escaped-string value
    pub fn to_pcstring(&self) -> Option<PcString> {
        match self {
            Self::Text(s) => Some(PcString::new(s.as_str())),
            Self::Symbol(sym) => Some(PcString::new(sym.clone())),
            Self::PcString(pcs) => Some(pcs.clone()),
            _ => None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::PcString(a), Self::PcString(b)) => a == b,
            (Self::PcString(pcs), Self::Text(s)) | (Self::Text(s), Self::PcString(pcs)) => {
                pcs.eq_raw(s)
            }
            (Self::Comment(a), Self::Comment(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Text(s) => s == other,
            Self::PcString(pcs) => pcs.eq_raw(other),
            _ => false,
        }
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Element> for Node {
    fn eq(&self, other: &Element) -> bool {
        self.as_element().is_some_and(|e| e == other)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<&Element> for Node {
    fn from(e: &Element) -> Self {
        Self::Element(e.clone())
    }
}

impl From<Comment> for Node {
    fn from(c: Comment) -> Self {
        Self::Comment(c)
    }
}

impl From<PcString> for Node {
    fn from(pcs: PcString) -> Self {
        Self::PcString(pcs)
    }
}

impl From<Symbol> for Node {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Regex> for Node {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Text(n.to_string())
    }
}

/// Anything that can be added to an element's content
///
/// Single values add one node, `None` adds nothing, and sequences are
/// flattened one level.
pub trait IntoContent {
    fn push_into(self, dst: &mut Vec<Node>);
}

macro_rules! impl_into_content {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoContent for $ty {
                fn push_into(self, dst: &mut Vec<Node>) {
                    dst.push(self.into());
                }
            }
        )*
    };
}

impl_into_content!(
    Node, Element, &Element, Comment, PcString, Symbol, String, &str, Regex, i32, i64, u32, f64,
);

impl<T: Into<Node>> IntoContent for Option<T> {
    fn push_into(self, dst: &mut Vec<Node>) {
        if let Some(item) = self {
            dst.push(item.into());
        }
    }
}

impl<T: Into<Node>> IntoContent for Vec<T> {
    fn push_into(self, dst: &mut Vec<Node>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<Node>, const N: usize> IntoContent for [T; N] {
    fn push_into(self, dst: &mut Vec<Node>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

/// An attribute value
#[derive(Clone, Debug)]
pub enum AttrValue {
    /// Present but unset; never written
    Nil,
    /// `true` is written literally, `false` suppresses the attribute
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Symbol(Symbol),
    PcString(PcString),
    /// Regular expression; only meaningful inside templates
    Regex(Regex),
}

impl AttrValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Textual form of the value, `None` for nil
    pub fn text_form(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Nil => None,
            Self::Bool(b) => Some(Cow::Owned(b.to_string())),
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(n) => Some(Cow::Owned(n.to_string())),
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Symbol(sym) => Some(Cow::Borrowed(sym.as_str())),
            Self::PcString(pcs) => Some(Cow::Borrowed(pcs.source_text())),
            Self::Regex(re) => Some(Cow::Borrowed(re.as_str())),
        }
    }

    /// Value coerced to an escaped-string value, `None` for nil
    pub fn to_pcstring(&self) -> Option<PcString> {
        match self {
            Self::PcString(pcs) => Some(pcs.clone()),
            Self::Symbol(sym) => Some(PcString::new(sym.clone())),
            other => other.text_form().map(|s| PcString::new(s.into_owned())),
        }
    }

    /// Escaped text written between the quotes, `None` if the attribute is suppressed
    pub(crate) fn markup(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Nil | Self::Bool(false) => None,
            Self::Bool(true) => Some(Cow::Borrowed("true")),
            Self::PcString(pcs) => Some(Cow::Borrowed(pcs.encoded_string())),
            other => other.text_form().map(|s| Cow::Owned(encode(&s))),
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::PcString(a), Self::PcString(b)) => a == b,
            (Self::PcString(pcs), Self::Text(s)) | (Self::Text(s), Self::PcString(pcs)) => {
                pcs.eq_raw(s)
            }
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl PartialEq<str> for AttrValue {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Text(s) => s == other,
            Self::PcString(pcs) => pcs.eq_raw(other),
            _ => false,
        }
    }
}

impl PartialEq<&str> for AttrValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Symbol> for AttrValue {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

impl From<PcString> for AttrValue {
    fn from(pcs: PcString) -> Self {
        Self::PcString(pcs)
    }
}

impl From<Regex> for AttrValue {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}
