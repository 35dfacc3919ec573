//! Escaped-string values
//!
//! A [`PcString`] remembers whether its source text is already markup-escaped.
//! Two values compare equal when their encoded forms agree. A raw string is
//! treated as unescaped text, so it compares by its encoded form too.

use std::fmt;

use crate::symbol::Symbol;
use crate::writer::WriteXml;

/// Escape `& < > " '` into their predefined entities
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    encode_into(&mut out, s);
    out
}

/// Append the escaped form of `s` to `dst`
pub fn encode_into(dst: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => dst.push_str("&amp;"),
            '<' => dst.push_str("&lt;"),
            '>' => dst.push_str("&gt;"),
            '"' => dst.push_str("&quot;"),
            '\'' => dst.push_str("&apos;"),
            c => dst.push(c),
        }
    }
}

/// The scalar a [`PcString`] was built from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    Symbol(Symbol),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Symbol(sym) => sym.as_str(),
        }
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Symbol> for Source {
    fn from(sym: Symbol) -> Self {
        Self::Symbol(sym)
    }
}

/// Parsed character data: text plus its canonical escaped form
#[derive(Clone, Debug)]
pub struct PcString {
    src: Source,
    encoded: String,
    pre_escaped: bool,
}

impl PcString {
    /// Wrap raw text; the encoded form is computed eagerly
    pub fn new(src: impl Into<Source>) -> Self {
        let src = src.into();
        let encoded = encode(src.as_str());
        Self {
            src,
            encoded,
            pre_escaped: false,
        }
    }

    /// Wrap text that is already escaped markup; it is emitted verbatim
    pub fn pre_escaped(src: impl Into<Source>) -> Self {
        let src = src.into();
        let encoded = src.as_str().to_owned();
        Self {
            src,
            encoded,
            pre_escaped: true,
        }
    }

    /// Return `value` itself if it already is a `PcString`, otherwise wrap it
    pub fn coerce(value: impl Into<Self>) -> Self {
        value.into()
    }

    pub fn src(&self) -> &Source {
        &self.src
    }

    /// Textual form of the source, before any escaping
    pub fn source_text(&self) -> &str {
        self.src.as_str()
    }

    pub fn encoded_string(&self) -> &str {
        &self.encoded
    }

    pub fn is_pre_escaped(&self) -> bool {
        self.pre_escaped
    }

    /// True if `raw`, once escaped, equals this value's encoded form
    pub fn eq_raw(&self, raw: &str) -> bool {
        self.encoded == encode(raw)
    }
}

impl WriteXml for PcString {
    fn write_to<'a>(&self, dst: &'a mut String) -> &'a mut String {
        dst.push_str(&self.encoded);
        dst
    }
}

impl fmt::Display for PcString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl PartialEq for PcString {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for PcString {}

impl PartialEq<str> for PcString {
    fn eq(&self, other: &str) -> bool {
        self.eq_raw(other)
    }
}

impl PartialEq<&str> for PcString {
    fn eq(&self, other: &&str) -> bool {
        self.eq_raw(other)
    }
}

impl PartialEq<String> for PcString {
    fn eq(&self, other: &String) -> bool {
        self.eq_raw(other)
    }
}

impl From<&str> for PcString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PcString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Symbol> for PcString {
    fn from(sym: Symbol) -> Self {
        Self::new(sym)
    }
}

impl From<&Self> for PcString {
    fn from(pcs: &Self) -> Self {
        pcs.clone()
    }
}
