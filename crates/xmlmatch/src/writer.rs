//! Markup serialization
//!
//! Output grammar:
//! - empty element: `<name a='v' />`
//! - element with content: `<name a='v'>content</name>`
//! - comment: `<!-- text -->`
//!
//! Attribute values are single-quoted and escaped. `nil` and `false` values
//! suppress the attribute; `true` is written as `true`.

use crate::element::Element;
use crate::node::Node;
use crate::pcstring::encode_into;

/// Serialize into a caller-supplied buffer
pub trait WriteXml {
    /// Append markup to `dst` and hand the same buffer back
    fn write_to<'a>(&self, dst: &'a mut String) -> &'a mut String;

    /// Serialize into a fresh string
    fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl WriteXml for Element {
    fn write_to<'a>(&self, dst: &'a mut String) -> &'a mut String {
        dst.push('<');
        dst.push_str(self.name().as_str());

        for (key, value) in self.attributes().iter() {
            if let Some(markup) = value.markup() {
                dst.push(' ');
                dst.push_str(key.as_str());
                dst.push_str("='");
                dst.push_str(&markup);
                dst.push('\'');
            }
        }

        let contents = self.contents();
        if contents.is_empty() {
            dst.push_str(" />");
            return dst;
        }

        dst.push('>');
        for child in contents.iter() {
            child.write_to(dst);
        }
        dst.push_str("</");
        dst.push_str(self.name().as_str());
        dst.push('>');
        dst
    }
}

impl WriteXml for Node {
    fn write_to<'a>(&self, dst: &'a mut String) -> &'a mut String {
        match self {
            Self::Element(e) => e.write_to(dst),
            Self::Comment(c) => c.write_to(dst),
            Self::PcString(pcs) => pcs.write_to(dst),
            Self::Text(s) => {
                encode_into(dst, s);
                dst
            }
            Self::Symbol(sym) => {
                encode_into(dst, sym.as_str());
                dst
            }
            Self::Regex(re) => {
                encode_into(dst, re.as_str());
                dst
            }
        }
    }
}
