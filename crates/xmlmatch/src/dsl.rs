//! Declarative tree construction
//!
//! Two ways to assemble a tree without a run of `append` calls:
//!
//! ```
//! use xmlmatch::{element, ElementBuilder, WriteXml};
//!
//! let list = element!("ul", { "class" => "menu" };
//!     #["li"; "first"];
//!     #["li"; "second"];
//! );
//! assert_eq!(
//!     list.to_xml(),
//!     "<ul class='menu'><li>first</li><li>second</li></ul>"
//! );
//!
//! let same = ElementBuilder::new("ul")
//!     .attr("class", "menu")
//!     .child(element!("li"; "first"))
//!     .child(element!("li"; "second"))
//!     .build();
//! assert_eq!(same, list);
//! ```

use crate::element::{Attributes, Element, RenamableElement};
use crate::node::{AttrValue, IntoContent, Node};
use crate::symbol::Symbol;

/// Build an [`Element`](crate::Element) tree
///
/// - `element!(name)` – empty element
/// - `element!(name, { key => value, ... })` – with attributes
/// - `element!(name; child; child; ...)` – with content
/// - `element!(name, { ... }; child; ...)` – both
///
/// Inside the content list `#[ ... ]` nests a sub-element using the same
/// grammar, and `..iter` splices every item an iterator yields.
#[macro_export]
macro_rules! element {
    // Entry points
    ($name:expr, { $($key:expr => $value:expr),* $(,)? }; $($rest:tt)*) => {{
        let e = $crate::element!($name, { $($key => $value),* });
        $crate::element!(@children e, $($rest)*);
        e
    }};
    ($name:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let e = $crate::Element::new($name);
        $( e.add_attribute($key, $value); )*
        e
    }};
    ($name:expr; $($rest:tt)*) => {{
        let e = $crate::Element::new($name);
        $crate::element!(@children e, $($rest)*);
        e
    }};
    ($name:expr) => {
        $crate::Element::new($name)
    };

    // Content list
    (@children $e:ident) => {};
    (@children $e:ident,) => {};

    (@children $e:ident, #[ $($sub:tt)* ]; $($rest:tt)*) => {{
        $e.append($crate::element!($($sub)*));
        $crate::element!(@children $e, $($rest)*);
    }};
    (@children $e:ident, #[ $($sub:tt)* ]) => {{
        $e.append($crate::element!($($sub)*));
    }};

    (@children $e:ident, .. $iter:expr; $($rest:tt)*) => {{
        for child in $iter {
            $e.add(child);
        }
        $crate::element!(@children $e, $($rest)*);
    }};
    (@children $e:ident, .. $iter:expr) => {{
        for child in $iter {
            $e.add(child);
        }
    }};

    (@children $e:ident, $child:expr; $($rest:tt)*) => {{
        $e.add($child);
        $crate::element!(@children $e, $($rest)*);
    }};
    (@children $e:ident, $child:expr) => {{
        $e.add($child);
    }};
}

/// Owned, move-style builder that produces an [`Element`] in one step
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    name: Symbol,
    attributes: Attributes,
    contents: Vec<Node>,
}

impl ElementBuilder {
    pub fn new(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            contents: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value for the same key
    pub fn attr(mut self, key: impl Into<Symbol>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add content with the same flattening rules as [`Element::add`]
    pub fn child(mut self, content: impl IntoContent) -> Self {
        content.push_into(&mut self.contents);
        self
    }

    pub fn children<I>(mut self, contents: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoContent,
    {
        for content in contents {
            content.push_into(&mut self.contents);
        }
        self
    }

    pub fn build(self) -> Element {
        let element = Element::with_attributes(self.name, self.attributes);
        element.contents_mut().extend(self.contents);
        element
    }

    pub fn build_renamable(self) -> RenamableElement {
        let element = RenamableElement::with_attributes(self.name, self.attributes);
        element.contents_mut().extend(self.contents);
        element
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

impl From<ElementBuilder> for Node {
    fn from(builder: ElementBuilder) -> Self {
        Self::Element(builder.build())
    }
}

impl IntoContent for ElementBuilder {
    fn push_into(self, dst: &mut Vec<Node>) {
        dst.push(self.into());
    }
}
