//! xmlmatch - In-memory XML element trees with structural pattern matching
//!
//! # Quick Start
//!
//! ```
//! use xmlmatch::{Element, NodeKind, Pattern, WriteXml};
//! # fn main() -> Result<(), xmlmatch::Error> {
//! let doc = Element::with_attributes("item", [("id", "1")]);
//! doc.append(Element::new("name")).append("a & b");
//! assert_eq!(doc.to_xml(), "<item id='1'><name />a &amp; b</item>");
//!
//! assert!(doc.matches("item"));
//! assert!(doc.has(Pattern::regex("amp;")?));
//! assert_eq!(doc.find(NodeKind::Element).len(), 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod symbol;
pub use symbol::Symbol;

pub mod pcstring;
pub use pcstring::{encode, PcString};

pub mod comment;
pub use comment::Comment;

pub mod node;
pub use node::{AttrValue, IntoContent, Node, NodeKind};

pub mod writer;
pub use writer::WriteXml;

pub mod element;
pub use element::{Attributes, Element, ElementIndex, RenamableElement};

pub mod pattern;
pub use pattern::Pattern;

pub mod search;
pub use search::Config;

pub mod dsl;
pub use dsl::ElementBuilder;

pub mod assertions;
